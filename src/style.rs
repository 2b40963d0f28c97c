/// An ordered list of CSS declarations.
///
/// Declarations are applied in insertion order. Setting a property twice replaces the earlier
/// value in place. An empty value removes the property when applied to an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T>(mut self, property: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        let value = value.to_string();

        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.declarations.push((property, value)),
        }

        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }
}
