//! Per-shape numeric parameter storage.

/// Current parameter values for the selected shape, kept in the shape's
/// declared order so the host can rebuild its selector directly from it.
///
/// The key set is always exactly the owning shape's parameter list; the
/// whole state is replaced (reset to defaults) when the shape changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamState {
    values: Vec<(&'static str, f32)>,
}

impl ParamState {
    /// Build from positionally paired name and default lists.
    pub fn from_defaults(names: &'static [&'static str], defaults: &[f32]) -> Self {
        Self {
            values: names.iter().copied().zip(defaults.iter().copied()).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Overwrite one value. Returns `false` (and changes nothing) when the
    /// shape has no parameter with that name.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
