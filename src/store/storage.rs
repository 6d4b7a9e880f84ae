use super::StoredComment;
use crate::{Error, Result};
use libsql::{Builder, Connection, Database};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

struct Backend {
    // Kept alive for the lifetime of the connection.
    _db: Database,
    conn: Connection,
}

/// Comments and user nicknames, in libsql with an in-memory fallback when the
/// database can't be opened or a query fails.
pub struct CommentStore {
    backend: Option<Backend>,
    fallback_comments: Arc<Mutex<Vec<StoredComment>>>,
    fallback_nicknames: Arc<Mutex<HashMap<String, String>>>,
}

impl CommentStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        let mut store = Self {
            backend: None,
            fallback_comments: Arc::new(Mutex::new(Vec::new())),
            fallback_nicknames: Arc::new(Mutex::new(HashMap::new())),
        };

        match Self::open(db_path).await {
            Ok(backend) => {
                info!("Database initialized successfully: {}", db_path);
                store.backend = Some(backend);
            }
            Err(e) => {
                warn!(
                    "Database initialization failed, using in-memory fallback: {}",
                    e
                );
            }
        }

        Ok(store)
    }

    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    async fn open(db_path: &str) -> Result<Backend> {
        let db = Builder::new_local(db_path).build().await?;
        let conn = db.connect()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                post TEXT NOT NULL,
                text TEXT NOT NULL,
                nickname TEXT NOT NULL,
                timestamp INTEGER NOT NULL
            )
            "#,
            (),
        )
        .await?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_comments_post_timestamp ON comments (post, timestamp)",
            (),
        )
        .await?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS user_info (
                id TEXT PRIMARY KEY,
                nickname TEXT NOT NULL
            )
            "#,
            (),
        )
        .await?;

        Ok(Backend { _db: db, conn })
    }

    pub async fn save(&self, comment: StoredComment) -> Result<()> {
        if let Some(ref backend) = self.backend {
            match Self::save_to_db(&backend.conn, &comment).await {
                Ok(()) => {
                    debug!("Comment saved to database for post: {}", comment.post);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Failed to save to database, using fallback: {}", e);
                }
            }
        }

        lock(&self.fallback_comments)?.push(comment);
        Ok(())
    }

    async fn save_to_db(conn: &Connection, comment: &StoredComment) -> Result<()> {
        conn.execute(
            "INSERT INTO comments (post, text, nickname, timestamp) VALUES (?, ?, ?, ?)",
            (
                comment.post.as_str(),
                comment.text.as_str(),
                comment.nickname.as_str(),
                comment.timestamp,
            ),
        )
        .await?;
        Ok(())
    }

    /// Newest comments for `post`, at most `limit` of them when a limit is given.
    pub async fn list(&self, post: &str, limit: Option<u32>) -> Result<Vec<StoredComment>> {
        if let Some(ref backend) = self.backend {
            match Self::list_from_db(&backend.conn, post, limit).await {
                Ok(comments) => {
                    debug!(
                        "Retrieved {} comments from database for post: {}",
                        comments.len(),
                        post
                    );
                    return Ok(comments);
                }
                Err(e) => {
                    warn!("Failed to read from database, using fallback: {}", e);
                }
            }
        }

        let fallback = lock(&self.fallback_comments)?;
        let mut comments: Vec<StoredComment> = fallback
            .iter()
            .rev()
            .filter(|c| c.post == post)
            .cloned()
            .collect();
        // Stable sort keeps later inserts first among equal timestamps.
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = limit {
            comments.truncate(limit as usize);
        }
        Ok(comments)
    }

    async fn list_from_db(
        conn: &Connection,
        post: &str,
        limit: Option<u32>,
    ) -> Result<Vec<StoredComment>> {
        // SQLite treats a negative LIMIT as unbounded.
        let limit = limit.map_or(-1, i64::from);
        let mut rows = conn
            .query(
                "SELECT id, text, post, timestamp, nickname FROM comments WHERE post = ? ORDER BY timestamp DESC, id DESC LIMIT ?",
                (post, limit),
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(StoredComment {
                id: Some(row.get(0)?),
                text: row.get(1)?,
                post: row.get(2)?,
                timestamp: row.get(3)?,
                nickname: row.get(4)?,
            });
        }
        Ok(comments)
    }

    /// Removes every comment. Returns how many were deleted.
    ///
    /// The fallback is only cleared once the database delete has succeeded.
    pub async fn delete_all(&self) -> Result<u64> {
        let mut deleted = match self.backend {
            Some(ref backend) => backend.conn.execute("DELETE FROM comments", ()).await?,
            None => 0,
        };

        {
            let mut fallback = lock(&self.fallback_comments)?;
            deleted += fallback.len() as u64;
            fallback.clear();
        }

        info!("Deleted {} comments", deleted);
        Ok(deleted)
    }

    /// The visitor's chosen nickname, if they've set one.
    pub async fn nickname(&self, user_id: &str) -> Result<Option<String>> {
        if let Some(ref backend) = self.backend {
            match Self::nickname_from_db(&backend.conn, user_id).await {
                Ok(Some(nickname)) => return Ok(Some(nickname)),
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to read nickname from database, using fallback: {}", e);
                }
            }
        }

        Ok(lock(&self.fallback_nicknames)?.get(user_id).cloned())
    }

    async fn nickname_from_db(conn: &Connection, user_id: &str) -> Result<Option<String>> {
        let mut rows = conn
            .query("SELECT nickname FROM user_info WHERE id = ?", [user_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    pub async fn set_nickname(&self, user_id: &str, nickname: &str) -> Result<()> {
        if let Some(ref backend) = self.backend {
            match backend
                .conn
                .execute(
                    "INSERT INTO user_info (id, nickname) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET nickname = excluded.nickname",
                    (user_id, nickname),
                )
                .await
            {
                Ok(_) => {
                    debug!("Nickname stored for user: {}", user_id);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Failed to store nickname in database, using fallback: {}", e);
                }
            }
        }

        lock(&self.fallback_nicknames)?.insert(user_id.to_string(), nickname.to_string());
        Ok(())
    }

    /// Nickname to attach to a new comment; empty when none is set.
    pub async fn nickname_or_default(&self, user_id: &str) -> Result<String> {
        Ok(self.nickname(user_id).await?.unwrap_or_default())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))
}
