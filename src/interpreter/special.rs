use phf::phf_map;

/// Operators the evaluator handles itself instead of calling a function.
/// Matched by name before any scope lookup, so they cannot be shadowed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SpecialForm {
    If,
    Let,
}

pub static SPECIAL_FORMS: phf::Map<&'static str, SpecialForm> = phf_map! {
    "IF" => SpecialForm::If,
    "LET" => SpecialForm::Let,
};

impl SpecialForm {
    pub fn lookup(name: &str) -> Option<SpecialForm> { SPECIAL_FORMS.get(name).copied() }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::If => "IF",
            SpecialForm::Let => "LET",
        }
    }
}
