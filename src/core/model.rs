//! Animation data model.
//!
//! An [`Animation`] is a non-empty list of equally sized [`Frame`]s. The
//! persisted form is [`AnimationRecord`], which mirrors the `.leda` JSON layout.

use super::cell_model::CellModel;
use super::error::ModelError;
use serde::{Deserialize, Serialize};

/// Largest supported height or width.
pub const MAX_SIDE: usize = 256;

/// Matrix size as `(height, width)`. Serialized as `[height, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.height == 0 || self.width == 0 {
            return Err(ModelError::ZeroDimension {
                height: self.height,
                width: self.width,
            });
        }
        if self.height > MAX_SIDE || self.width > MAX_SIDE {
            return Err(ModelError::TooLarge {
                height: self.height,
                width: self.width,
                max: MAX_SIDE,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

impl From<[usize; 2]> for Dimensions {
    fn from([height, width]: [usize; 2]) -> Self {
        Self { height, width }
    }
}

impl From<Dimensions> for [usize; 2] {
    fn from(d: Dimensions) -> Self {
        [d.height, d.width]
    }
}

/// One grid snapshot, addressed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    rows: Vec<Vec<u8>>,
}

impl Frame {
    /// All-zero frame.
    pub fn blank(dimensions: Dimensions) -> Self {
        Self {
            rows: vec![vec![0; dimensions.width]; dimensions.height],
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut u8> {
        self.rows.get_mut(y).and_then(|row| row.get_mut(x))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    fn check_shape(&self, index: usize, dimensions: Dimensions) -> Result<(), ModelError> {
        let found_width = self.rows.iter().map(Vec::len).find(|&w| w != dimensions.width);
        if self.rows.len() != dimensions.height || found_width.is_some() {
            return Err(ModelError::ShapeMismatch {
                frame: index,
                height: dimensions.height,
                width: dimensions.width,
                found_height: self.rows.len(),
                found_width: found_width.unwrap_or(dimensions.width),
            });
        }
        Ok(())
    }
}

/// Ordered frames sharing one size. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    dimensions: Dimensions,
    frames: Vec<Frame>,
}

impl Animation {
    /// Single blank frame at `dimensions`.
    pub fn blank(dimensions: Dimensions) -> Result<Self, ModelError> {
        dimensions.validate()?;
        Ok(Self {
            dimensions,
            frames: vec![Frame::blank(dimensions)],
        })
    }

    /// Build from raw frames, checking size, shape and cell range.
    pub fn from_frames(
        dimensions: Dimensions,
        frames: Vec<Frame>,
        model: CellModel,
    ) -> Result<Self, ModelError> {
        dimensions.validate()?;
        if frames.is_empty() {
            return Err(ModelError::Empty);
        }

        let max = model.max_value();
        for (index, frame) in frames.iter().enumerate() {
            frame.check_shape(index, dimensions)?;
            for (row, cells) in frame.rows.iter().enumerate() {
                if let Some(col) = cells.iter().position(|&v| v > max) {
                    return Err(ModelError::CellOutOfRange {
                        frame: index,
                        row,
                        col,
                        value: cells[col],
                        max,
                    });
                }
            }
        }

        Ok(Self { dimensions, frames })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    /// Append a deep copy of the last frame.
    pub fn duplicate_last(&mut self) {
        if let Some(last) = self.frames.last().cloned() {
            self.frames.push(last);
        }
    }

    /// Remove the frame at `index` unless it is the only one left.
    pub fn remove(&mut self, index: usize) -> Option<Frame> {
        if self.frames.len() <= 1 || index >= self.frames.len() {
            return None;
        }
        Some(self.frames.remove(index))
    }
}

impl Default for Animation {
    /// A single blank 1x1 frame.
    fn default() -> Self {
        let dimensions = Dimensions::new(1, 1);
        Self {
            dimensions,
            frames: vec![Frame::blank(dimensions)],
        }
    }
}

/// Persisted form of an animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRecord {
    /// Milliseconds between frames.
    pub speed: u64,
    pub dimensions: Dimensions,
    pub animation: Vec<Frame>,
}

impl AnimationRecord {
    pub fn new(speed: u64, animation: &Animation) -> Self {
        Self {
            speed,
            dimensions: animation.dimensions(),
            animation: animation.frames().to_vec(),
        }
    }

    pub fn into_animation(self, model: CellModel) -> Result<(u64, Animation), ModelError> {
        let animation = Animation::from_frames(self.dimensions, self.animation, model)?;
        Ok((self.speed, animation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&[u8]]) -> Frame {
        Frame::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_blank_animation() {
        let anim = Animation::blank(Dimensions::new(3, 5)).unwrap();
        assert_eq!(anim.frame_count(), 1);
        let first = anim.frame(0).unwrap();
        assert_eq!(first.rows().len(), 3);
        assert!(first.rows().iter().all(|r| r.len() == 5));
        assert!(first.cells().all(|c| c == 0));
    }

    #[test]
    fn test_blank_rejects_zero_dimension() {
        assert_eq!(
            Animation::blank(Dimensions::new(0, 4)),
            Err(ModelError::ZeroDimension { height: 0, width: 4 })
        );
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert_eq!(
            Animation::blank(Dimensions::new(usize::MAX, 1)),
            Err(ModelError::TooLarge { height: usize::MAX, width: 1, max: MAX_SIDE })
        );
        assert!(Animation::blank(Dimensions::new(MAX_SIDE, MAX_SIDE)).is_ok());

        let json = r#"{"speed":100,"dimensions":[100000,1],"animation":[]}"#;
        let record: AnimationRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            record.into_animation(CellModel::Monochrome),
            Err(ModelError::TooLarge { height: 100000, .. })
        ));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut anim = Animation::blank(Dimensions::new(2, 2)).unwrap();
        anim.duplicate_last();
        *anim.frame_mut(1).unwrap().get_mut(1, 0).unwrap() = 1;

        assert_eq!(anim.frame(0).unwrap().get(1, 0), Some(0));
        assert_eq!(anim.frame(1).unwrap().get(1, 0), Some(1));
    }

    #[test]
    fn test_remove_keeps_last_frame() {
        let mut anim = Animation::blank(Dimensions::new(1, 1)).unwrap();
        assert!(anim.remove(0).is_none());
        anim.duplicate_last();
        assert!(anim.remove(1).is_some());
        assert_eq!(anim.frame_count(), 1);
    }

    #[test]
    fn test_from_frames_validation() {
        let dims = Dimensions::new(2, 2);
        assert_eq!(
            Animation::from_frames(dims, vec![], CellModel::Monochrome),
            Err(ModelError::Empty)
        );

        let ragged = frame(&[&[0, 0], &[0]]);
        assert!(matches!(
            Animation::from_frames(dims, vec![ragged], CellModel::Monochrome),
            Err(ModelError::ShapeMismatch { frame: 0, found_width: 1, .. })
        ));

        let colored = frame(&[&[0, 3], &[0, 0]]);
        assert!(matches!(
            Animation::from_frames(dims, vec![colored.clone()], CellModel::Monochrome),
            Err(ModelError::CellOutOfRange { value: 3, col: 1, row: 0, .. })
        ));
        assert!(Animation::from_frames(dims, vec![colored], CellModel::Palette).is_ok());
    }

    #[test]
    fn test_record_json_layout() {
        let json = r#"{"speed":250,"dimensions":[2,3],"animation":[[[0,1,0],[1,0,1]]]}"#;
        let record: AnimationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.speed, 250);
        assert_eq!(record.dimensions, Dimensions::new(2, 3));
        assert_eq!(record.animation[0].get(2, 1), Some(1));
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
