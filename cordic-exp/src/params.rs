//! Closed parameter sets of the emulated exponential units.
//!
//! Raw integer codes (as used by C callers) convert
//! through `TryFrom`, which is the only place an unsupported value can enter.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::CordicError;

/// Datapath width of the emulated unit. Also the number of CORDIC iterations.
#[derive(
    Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    #[strum(to_string = "8-bit")]
    W8,
    #[strum(to_string = "16-bit")]
    W16,
    #[strum(to_string = "24-bit")]
    W24,
    #[strum(to_string = "32-bit")]
    W32,
}

impl BitWidth {
    pub fn bits(self) -> usize {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W24 => 24,
            BitWidth::W32 => 32,
        }
    }

    /// Residual magnitude below which an angle-recoding engine stops: `2^-(bits-1)`.
    pub fn tolerance(self) -> f64 {
        2f64.powi(-(self.bits() as i32 - 1))
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = CordicError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            24 => Ok(BitWidth::W24),
            32 => Ok(BitWidth::W32),
            other => Err(CordicError::UnsupportedBitWidth(other)),
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.bits() as u32
    }
}

/// Which measured error of a unit is injected by the bias model.
#[derive(
    Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorMode {
    Average,
    WorstCase,
    /// Idealized unit; a single near-zero bias regardless of width or variant.
    Negligible,
}

impl TryFrom<u8> for ErrorMode {
    type Error = CordicError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ErrorMode::Average),
            1 => Ok(ErrorMode::WorstCase),
            2 => Ok(ErrorMode::Negligible),
            other => Err(CordicError::UnsupportedMode(other)),
        }
    }
}

/// Hardware micro-architecture the bias table was measured on.
#[derive(
    Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CordicVariant {
    Control,
    Conventional,
    AngleRecoded,
    Pipelined,
}

impl CordicVariant {
    /// Iterative engine that emulates this variant, if there is one.
    pub fn engine(self) -> Option<Engine> {
        match self {
            CordicVariant::Control => None,
            CordicVariant::Conventional => Some(Engine::Conventional),
            CordicVariant::AngleRecoded | CordicVariant::Pipelined => Some(Engine::Pipelined),
        }
    }
}

impl TryFrom<u8> for CordicVariant {
    type Error = CordicError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CordicVariant::Control),
            1 => Ok(CordicVariant::Conventional),
            2 => Ok(CordicVariant::AngleRecoded),
            3 => Ok(CordicVariant::Pipelined),
            other => Err(CordicError::UnsupportedVariant(other)),
        }
    }
}

/// Simulated CORDIC micro-architectures.
#[derive(
    Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Engine {
    /// Fixed iteration-indexed angles with an upfront pre-scale.
    Conventional,
    /// Angle recoding with per-step scale correction and early termination.
    Pipelined,
}

impl TryFrom<u8> for Engine {
    type Error = CordicError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Engine::Conventional),
            1 => Ok(Engine::Pipelined),
            other => Err(CordicError::UnsupportedEngine(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn bit_width_codes() {
        for w in BitWidth::iter() {
            assert_eq!(BitWidth::try_from(u32::from(w)), Ok(w));
        }
        assert_eq!(
            BitWidth::try_from(12),
            Err(CordicError::UnsupportedBitWidth(12))
        );
        assert_eq!(BitWidth::try_from(0), Err(CordicError::UnsupportedBitWidth(0)));
    }

    #[test]
    fn tolerance() {
        assert_eq!(BitWidth::W8.tolerance(), 1.0 / 128.0);
        assert_eq!(BitWidth::W16.tolerance(), 2f64.powi(-15));
    }

    #[test]
    fn mode_and_variant_codes() {
        assert_eq!(ErrorMode::try_from(1), Ok(ErrorMode::WorstCase));
        assert_eq!(ErrorMode::try_from(3), Err(CordicError::UnsupportedMode(3)));
        assert_eq!(CordicVariant::try_from(2), Ok(CordicVariant::AngleRecoded));
        assert_eq!(
            CordicVariant::try_from(4),
            Err(CordicError::UnsupportedVariant(4))
        );
        assert_eq!(Engine::try_from(1), Ok(Engine::Pipelined));
        assert_eq!(Engine::try_from(2), Err(CordicError::UnsupportedEngine(2)));
    }

    #[test]
    fn variant_engines() {
        assert_eq!(CordicVariant::Control.engine(), None);
        assert_eq!(
            CordicVariant::Conventional.engine(),
            Some(Engine::Conventional)
        );
        assert_eq!(CordicVariant::AngleRecoded.engine(), Some(Engine::Pipelined));
        assert_eq!(CordicVariant::Pipelined.engine(), Some(Engine::Pipelined));
    }

    #[test]
    fn display_names() {
        assert_eq!(BitWidth::W24.to_string(), "24-bit");
        assert_eq!(ErrorMode::WorstCase.to_string(), "worst_case");
        assert_eq!(CordicVariant::AngleRecoded.to_string(), "angle_recoded");
    }
}
