//! Rule output for a single cell.

use tessel_core::{Attributes, Cell, State};

/// State (and attributes) to write for one position in the next generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Next state code.
    pub state: State,
    /// Next attributes. Empty for rules that track none.
    pub attributes: Attributes,
}

impl Transition {
    /// Move to `state` with no attributes.
    pub fn to(state: State) -> Self {
        Self {
            state,
            attributes: Attributes::new(),
        }
    }

    /// Carry `cell` over unchanged, attributes included.
    pub fn keep(cell: &Cell) -> Self {
        Self {
            state: cell.state,
            attributes: cell.attributes.clone(),
        }
    }

    /// Set an attribute on the outgoing cell.
    pub fn with_attribute(mut self, key: &str, value: i64) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::Position;

    #[test]
    fn keep_copies_attributes() {
        let mut cell = Cell::new(Position::new(0, 0), 2);
        cell.attributes.insert("energy".into(), 3);
        let t = Transition::keep(&cell);
        assert_eq!(t.state, 2);
        assert_eq!(t.attributes.get("energy"), Some(&3));
    }

    #[test]
    fn with_attribute_overwrites() {
        let t = Transition::to(1)
            .with_attribute("age", 1)
            .with_attribute("age", 4);
        assert_eq!(t.attributes.len(), 1);
        assert_eq!(t.attributes.get("age"), Some(&4));
    }
}
