//! A small document model for the site's pages.
//!
//! Elements are addressed by id or class, the same handles the page markup
//! exposes. Only the properties the page scripts touch are modelled.

mod element;

pub use element::{Display, Element};

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    /// Adds an element, replacing any existing one with the same id.
    pub fn insert(&mut self, element: Element) {
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Like [`Document::get_mut`], but a missing element is an error.
    pub fn require(&mut self, id: &str) -> Result<&mut Element> {
        self.get_mut(id).ok_or_else(|| Error::missing_element(id))
    }

    pub fn by_class(&self, class: &str) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    pub fn by_class_mut(&mut self, class: &str) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut().filter(move |e| e.has_class(class))
    }

    /// Sets the display of an element if the page has it. Returns whether it
    /// was found.
    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.display = display;
                true
            }
            None => false,
        }
    }

    pub fn set_class_display(&mut self, class: &str, display: Display) -> usize {
        let mut count = 0;
        for element in self.by_class_mut(class) {
            element.display = display;
            count += 1;
        }
        count
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(Element::is_visible)
    }
}
