use std::fmt::Display;
use std::str::FromStr;

use anyhow::bail;
use serde::{
    Deserialize,
    Serialize,
};

/// How two interval lists are combined.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum IntervalSetRule {
    /// Raw concatenation of both lists.
    #[default]
    Union,
    /// Bases covered by both lists.
    Intersection,
}

impl Display for IntervalSetRule {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            IntervalSetRule::Union => write!(f, "UNION"),
            IntervalSetRule::Intersection => write!(f, "INTERSECTION"),
        }
    }
}

impl FromStr for IntervalSetRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNION" => Ok(IntervalSetRule::Union),
            "INTERSECTION" => Ok(IntervalSetRule::Intersection),
            other => bail!("Unknown interval set rule: {}", other),
        }
    }
}

/// Which neighbouring intervals are collapsed by a merge pass.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum IntervalMergingRule {
    /// Overlapping and abutting intervals are merged.
    #[default]
    All,
    /// Only overlapping intervals are merged, abutting ones stay separate.
    OverlappingOnly,
}

impl Display for IntervalMergingRule {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            IntervalMergingRule::All => write!(f, "ALL"),
            IntervalMergingRule::OverlappingOnly => write!(f, "OVERLAPPING_ONLY"),
        }
    }
}

impl FromStr for IntervalMergingRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(IntervalMergingRule::All),
            "OVERLAPPING_ONLY" => Ok(IntervalMergingRule::OverlappingOnly),
            other => bail!("Unknown interval merging rule: {}", other),
        }
    }
}

/// Shape of a biallelic event, decided by the lengths of its alleles.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum VariantType {
    /// Single base substitution.
    Snp,
    /// Padding base followed by inserted bases.
    Insertion,
    /// Padding base followed by deleted bases.
    Deletion,
    /// Any other replacement of a reference span.
    BlockSubstitution,
}

impl VariantType {
    pub fn is_indel(&self) -> bool {
        matches!(self, VariantType::Insertion | VariantType::Deletion)
    }
}

impl Display for VariantType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", match self {
            VariantType::Snp => "SNP",
            VariantType::Insertion => "INSERTION",
            VariantType::Deletion => "DELETION",
            VariantType::BlockSubstitution => "BLOCK_SUBSTITUTION",
        })
    }
}

macro_rules! impl_serde_by_str {
    ($name: ty) => {
        impl Serialize for $name {
            fn serialize<S>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer, {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>, {
                let s = String::deserialize(deserializer)?;
                FromStr::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_serde_by_str!(IntervalSetRule);
impl_serde_by_str!(IntervalMergingRule);
