/// A named configuration value, with the bounds of the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if `value` is within the bounds of the option.
    ///
    /// Returns true if the value was set, and false otherwise.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}
