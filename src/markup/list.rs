const BULLET_MARKER: char = '*';

/// Bulleted list. Each item carries its own nesting depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    items: Vec<(String, usize)>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level item.
    pub fn add_item(&mut self, content: impl Into<String>) {
        self.add_item_at(content, 1);
    }

    /// Append an item at the given depth (1 = top level).
    pub fn add_item_at(&mut self, content: impl Into<String>, level: usize) {
        self.items.push((content.into(), level.max(1)));
    }

    pub fn with_item(mut self, content: impl Into<String>) -> Self {
        self.add_item(content);
        self
    }

    pub fn with_item_at(mut self, content: impl Into<String>, level: usize) -> Self {
        self.add_item_at(content, level);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn generate(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|(content, level)| {
                format!("{} {}", BULLET_MARKER.to_string().repeat(*level), content)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_items() {
        let mut list = List::new();
        list.add_item("this is an item");
        list.add_item("this is another item");
        list.add_item_at("this is a nested item", 2);
        list.add_item_at("this is a even more nested item", 3);

        assert_eq!(
            list.generate(),
            vec![
                "* this is an item",
                "* this is another item",
                "** this is a nested item",
                "*** this is a even more nested item",
            ]
        );
    }

    #[test]
    fn builder_form_matches_mutation() {
        let built = List::new().with_item("a").with_item_at("b", 2);
        let mut pushed = List::new();
        pushed.add_item("a");
        pushed.add_item_at("b", 2);
        assert_eq!(built, pushed);
        assert_eq!(built.len(), 2);
    }

    #[test]
    fn empty_list_generates_nothing() {
        assert!(List::new().generate().is_empty());
    }
}
