use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::grid::Variable;

/// `Assignment` maps a variable to the word currently placed in it.
///
/// This is the single mutable piece of search state: the backtracking
/// search places a word immediately before recursing and removes it again
/// on every exit path except success. Uses `Rc<str>` values so placing and
/// unplacing words never copies character data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    slots: HashMap<Variable, Rc<str>>,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(Variable, &Rc<str>)> = self.iter().collect();
        pairs.sort_by_key(|(v, _)| *v);
        let rendered: Vec<String> = pairs.iter().map(|(v, w)| format!("{v}→{w}")).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

impl Assignment {
    /// Place a word in a variable (cheap clone of Rc)
    pub fn set(&mut self, var: Variable, word: Rc<str>) {
        self.slots.insert(var, word);
    }

    /// Retrieve the word placed in a variable
    #[must_use]
    pub fn get(&self, var: Variable) -> Option<&Rc<str>> {
        self.slots.get(&var)
    }

    /// Remove the word placed in a variable, if any
    pub fn remove(&mut self, var: Variable) {
        self.slots.remove(&var);
    }

    /// Whether a variable has a word placed in it
    #[must_use]
    pub fn contains(&self, var: Variable) -> bool {
        self.slots.contains_key(&var)
    }

    /// Number of variables with a word placed
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the placed (variable, word) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &Rc<str>)> {
        self.slots.iter().map(|(v, w)| (*v, w))
    }
}
