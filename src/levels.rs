//! Level packs
//!
//! A pack is a JSON array of levels, each level an array of row strings in
//! the format understood by `LevelParser`.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::sim::{Level, LevelParser};

const BUNDLED_LEVELS: &str = include_str!("../assets/levels.json");

/// An ordered list of text levels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPack {
    levels: Vec<Vec<String>>,
}

impl LevelPack {
    pub fn new(levels: Vec<Vec<String>>) -> Self {
        Self { levels }
    }

    /// Decode a pack from JSON
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let pack: LevelPack = serde_json::from_str(json)?;
        log::info!("Loaded level pack with {} levels", pack.len());
        Ok(pack)
    }

    /// Levels shipped with the crate
    pub fn bundled() -> Result<Self, EngineError> {
        Self::from_json(BUNDLED_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Raw rows of level `index`
    pub fn rows(&self, index: usize) -> Option<&[String]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    /// Parse level `index` into a playable level
    pub fn build(&self, index: usize, parser: &mut LevelParser) -> Option<Level> {
        self.rows(index).map(|rows| parser.parse(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntityKind, LevelStatus};

    #[test]
    fn test_from_json() {
        let pack = LevelPack::from_json(r#"[[" @ o", "xxxx"], ["x"]]"#).unwrap();
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.rows(1), Some(&["x".to_string()][..]));
        assert!(pack.rows(2).is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            LevelPack::from_json(r#"{"levels": 3}"#),
            Err(EngineError::LevelPack(_))
        ));
        assert!(LevelPack::from_json("[[1, 2]]").is_err());
    }

    #[test]
    fn test_build() {
        let pack = LevelPack::new(vec![vec![" @ o".into(), "xxxx".into()]]);
        let mut parser = LevelParser::default();
        let level = pack.build(0, &mut parser).unwrap();
        assert_eq!(level.width(), 4);
        assert_eq!(level.height(), 2);
        assert_eq!(level.status(), LevelStatus::Playing);
        assert!(pack.build(1, &mut parser).is_none());
    }

    #[test]
    fn test_bundled_levels_are_playable() {
        let pack = LevelPack::bundled().unwrap();
        assert!(!pack.is_empty());

        let mut parser = LevelParser::default();
        for index in 0..pack.len() {
            let level = pack.build(index, &mut parser).unwrap();
            assert!(level.player().is_some(), "level {} has no player", index);
            assert!(
                !level.no_remaining(EntityKind::Coin),
                "level {} has no coins",
                index
            );
        }
    }
}
