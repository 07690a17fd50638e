/// The ordered pair of terms under comparison.
///
/// Measures look up their own thresholds; the context carries only what is
/// being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonContext<'a> {
    first: &'a str,
    second: &'a str,
}

impl<'a> ComparisonContext<'a> {
    pub const fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    pub fn first_term(&self) -> &'a str {
        self.first
    }

    pub fn second_term(&self) -> &'a str {
        self.second
    }
}
