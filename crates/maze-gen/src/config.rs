//! Generator settings.

/// Parameters for [`MazeGen`](crate::MazeGen).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Number of rows, border included. At least 3.
    pub rows: usize,
    /// Number of columns, border included. At least 3.
    pub cols: usize,
    /// Probability (0.0–1.0) that an interior cell starts out as a wall.
    pub wall_pct: f64,
    /// Whether the corridor walker may side-step once it is aligned with
    /// the goal on the chosen axis.
    pub wander: bool,
    /// Maximum random-walk steps per carve, as a multiple of the cell
    /// count. Past this the corridor is finished in a straight line.
    pub step_limit_factor: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            wall_pct: 0.5,
            wander: true,
            step_limit_factor: 4,
        }
    }
}

impl MazeConfig {
    /// Default settings for a `rows × cols` maze.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the interior wall probability (builder).
    pub fn with_wall_pct(mut self, wall_pct: f64) -> Self {
        self.wall_pct = wall_pct;
        self
    }

    /// Enable or disable corridor wandering (builder).
    pub fn with_wander(mut self, wander: bool) -> Self {
        self.wander = wander;
        self
    }

    /// Random-walk step budget for one corridor.
    pub fn carve_step_limit(&self) -> usize {
        self.rows * self.cols * self.step_limit_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten_half_walls() {
        let c = MazeConfig::default();
        assert_eq!((c.rows, c.cols), (10, 10));
        assert_eq!(c.wall_pct, 0.5);
        assert_eq!(c.carve_step_limit(), 400);
    }

    #[test]
    fn builders() {
        let c = MazeConfig::with_size(7, 12).with_wall_pct(0.3).with_wander(false);
        assert_eq!((c.rows, c.cols), (7, 12));
        assert_eq!(c.wall_pct, 0.3);
        assert!(!c.wander);
    }
}
