//! Catalog construction errors.
//!
//! The engine itself never fails: unknown ids, illegal combinations and missing
//! persisted state are normalized silently. The only fallible step is building a
//! [`Catalog`](crate::catalog::Catalog), which validates the invariants that make
//! lookup-with-fallback well defined.

/// The six catalog tables, used to label validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CatalogTable {
    Weapons,
    WeaponMods,
    WeaponCores,
    Armours,
    ArmourMods,
    TypeLocks,
}

/// Errors raised while validating catalog tables at startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A table has no entries, so there is nothing to fall back to.
    #[error("{0} table is empty")]
    EmptyTable(CatalogTable),

    /// The first entry of a modifier/armour table must be the null identity entry.
    #[error("first entry of {table} must have a null id and no effects, found {found:?}")]
    MissingIdentity {
        table: CatalogTable,
        found: Option<String>,
    },

    /// Only the leading identity entry may have a null id.
    #[error("{table} has a null id at position {index}")]
    UnexpectedNullId { table: CatalogTable, index: usize },

    /// The same id appears twice in a table.
    #[error("duplicate id {id:?} in {table}")]
    DuplicateId { table: CatalogTable, id: String },

    /// A reference points at an id missing from the referenced table.
    #[error("{from} entry {owner:?} references unknown {to} id {id:?}")]
    UnknownReference {
        from: CatalogTable,
        owner: String,
        to: CatalogTable,
        id: String,
    },
}
