/// What to do with a number that does not parse, such as `#` in `M 1,#`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberPolicy {
    /// Use zero instead, and record a `Diagnostic`.
    Lenient,
    /// Reject the whole path as malformed.
    Strict,
}

/// Which strings are lowercased when reading `<path>` elements.
///
/// Element names, attribute names and the `id` and `style` values are always lowercased.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaseFolding {
    /// Path data is used as written, so uppercase (absolute) commands keep their meaning.
    PreservePathData,
    /// Path data is lowercased too, which turns every command into a relative one.
    All,
}

/// Settings for extracting and flattening paths.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Numerator of the curve step count: each cubic curve is split into
    /// `|resolution / length of its control polygon|` straight segments.
    pub resolution: f64,
    /// Upper bound on the number of segments for one curve.
    pub max_steps: u32,
    pub numbers: NumberPolicy,
    pub case_folding: CaseFolding,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            resolution: 100.,
            max_steps: 2048,
            numbers: NumberPolicy::Lenient,
            case_folding: CaseFolding::PreservePathData,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn numbers(mut self, policy: NumberPolicy) -> Self {
        self.numbers = policy;
        self
    }

    pub fn case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }
}
