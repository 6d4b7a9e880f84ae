#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    None,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub id: String,
    pub classes: Vec<String>,
    pub display: Display,
    pub text: String,
    pub href: Option<String>,
    pub src: Option<String>,
    /// Current value of a form control such as a `<select>`.
    pub value: Option<String>,
    /// Text of each child list item, in order.
    pub items: Vec<String>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_visible(&self) -> bool {
        self.display != Display::None
    }

    /// Drops all list items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn append(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}
