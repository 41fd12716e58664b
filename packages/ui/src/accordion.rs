/// Single-open accordion. Starts with the first entry open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl Accordion {
    /// Selecting the open entry collapses it; any other entry replaces it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Entry whose image is shown: the open one, else the first.
    pub fn active_index(&self) -> usize {
        self.open.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_open_initially() {
        let a = Accordion::default();
        assert_eq!(a.open(), Some(0));
        assert!(a.is_open(0));
    }

    #[test]
    fn at_most_one_open() {
        let mut a = Accordion::default();
        a.toggle(2);
        assert_eq!(a.open(), Some(2));
        assert!(!a.is_open(0));
        a.toggle(4);
        assert_eq!(a.open(), Some(4));
        assert_eq!(a.active_index(), 4);
    }

    #[test]
    fn toggling_open_entry_collapses_and_image_falls_back() {
        let mut a = Accordion::default();
        a.toggle(3);
        a.toggle(3);
        assert_eq!(a.open(), None);
        assert_eq!(a.active_index(), 0);
        a.toggle(3);
        assert_eq!(a.open(), Some(3));
    }
}
