/// Default value of a column, rendered per backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnDefault {
    Int(i64),
    Bool(bool),
    Str(&'static str),
}
