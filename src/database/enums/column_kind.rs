/// Portable column types, rendered per backend by the DDL helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Auto-incrementing 64-bit surrogate key.
    Serial,
    Integer,
    BigInt,
    Boolean,
    Double,
    Varchar(u16),
    Char(u16),
    Text,
}
