//! # Markup Access
//!
//! The loaders only need a handful of reads from an element tree. They go
//! through [`MarkupNode`] so the tree can come from any parser; the one used
//! for definition files is `roxmltree`.

/// Read-only view of one element in an attributed tree.
pub trait MarkupNode: Sized {
    /// Element tag name.
    fn tag(&self) -> &str;

    /// Attribute value by name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order. Text and comments are skipped.
    fn child_elements(&self) -> impl Iterator<Item = Self>;

    /// Text content directly inside the element.
    fn text(&self) -> Option<&str>;

    /// Attribute parsed as a float.
    ///
    /// A missing attribute reads as 0.0. A present but unparsable attribute
    /// is returned as `Err` with the raw value.
    fn float_attribute(&self, name: &str) -> Result<f32, String> {
        match self.attribute(name) {
            None => Ok(0.0),
            Some(raw) => raw.trim().parse().map_err(|_| raw.to_owned()),
        }
    }
}

impl<'a, 'input> MarkupNode for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn child_elements(&self) -> impl Iterator<Item = Self> {
        self.children().filter(|n| n.is_element())
    }

    fn text(&self) -> Option<&str> {
        roxmltree::Node::text(self)
    }
}
