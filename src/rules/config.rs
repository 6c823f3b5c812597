use serde::{Deserialize, Serialize};

use crate::core::*;

/******************************************\
|==========================================|
|               Rules Config               |
|==========================================|
\******************************************/

/// # Rules Config
///
/// Per-game settings, loadable from JSON. Missing fields take their defaults:
/// European chess, North to move first, pawns promoting to a Queen.
///
/// ## Examples
///
/// ```
/// use dualchess::{RulesConfig, Side, Variant};
///
/// let config = RulesConfig::from_json(r#"{ "variant": "xiangqi" }"#).unwrap();
/// assert_eq!(config.variant, Variant::Xiangqi);
/// assert_eq!(config.first_side, Side::North);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub variant: Variant,

    pub first_side: Side,

    /// Used when a pawn promotes without an explicit choice
    pub default_promotion: PieceKind,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            variant: Variant::European,
            first_side: Side::North,
            default_promotion: PieceKind::Queen,
        }
    }
}

impl RulesConfig {
    pub fn new(variant: Variant) -> Self {
        RulesConfig {
            variant,
            ..Default::default()
        }
    }

    /// Parses and validates a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.variant.is_active(self.first_side) {
            return Err(ConfigError::InactiveSide {
                side: self.first_side,
                variant: self.variant,
            });
        }

        if !self.default_promotion.is_promotion() {
            return Err(ConfigError::InvalidPromotion(self.default_promotion));
        }

        Ok(())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.variant, Variant::European);
        assert_eq!(config.first_side, Side::North);
        assert_eq!(config.default_promotion, PieceKind::Queen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = RulesConfig::from_json(
            r#"{ "variant": "european", "first_side": "south", "default_promotion": "knight" }"#,
        )
        .unwrap();
        assert_eq!(config.first_side, Side::South);
        assert_eq!(config.default_promotion, PieceKind::Knight);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(RulesConfig::from_json("{}").unwrap(), RulesConfig::default());
    }

    #[test]
    fn test_rejects_inactive_side() {
        let result = RulesConfig::from_json(r#"{ "first_side": "east" }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InactiveSide {
                side: Side::East,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_promotion() {
        let result = RulesConfig::from_json(r#"{ "default_promotion": "king" }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPromotion(PieceKind::King))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            RulesConfig::from_json(r#"{ "variant": "shogi" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "colour": "white" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RulesConfig::new(Variant::Xiangqi);
        let json = config.to_json().unwrap();
        assert_eq!(RulesConfig::from_json(&json).unwrap(), config);
    }
}
