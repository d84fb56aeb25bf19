use bevy::math::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::path::bezier::QuadraticBezier;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lane {
    pub name: String,
    pub path: QuadraticBezier,
    // linear rgb, only used for the debug polyline
    pub color: [f32; 3],
}

/// Ordered set of lanes the ball can run along. Index 0 is the leftmost lane.
#[derive(Debug, Clone, Default)]
pub struct Lanes(IndexMap<String, Lane>);

impl Lanes {
    pub fn new() -> Self {
        Lanes(IndexMap::new())
    }

    pub fn insert(&mut self, lane: Lane) {
        self.0.insert(lane.name.clone(), lane);
    }

    pub fn get(&self, index: usize) -> Option<&Lane> {
        self.0.get_index(index).map(|(_, lane)| lane)
    }

    /// Builds the set in order, refusing a second lane with a name already taken.
    pub fn from_unique<'a>(lanes: impl IntoIterator<Item = &'a Lane>) -> Result<Self, String> {
        let mut set = Lanes::new();
        for lane in lanes {
            if set.0.contains_key(&lane.name) {
                return Err(format!("duplicate lane name '{}'", lane.name));
            }
            set.insert(lane.clone());
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.0.values()
    }

    /// Position on lane `index` at `t`, or `None` if the lane does not exist.
    pub fn position_at(&self, index: usize, t: f32) -> Option<Vec3> {
        self.get(index).map(|lane| lane.path.position_at(t))
    }
}

impl FromIterator<Lane> for Lanes {
    fn from_iter<I: IntoIterator<Item = Lane>>(iter: I) -> Self {
        let mut lanes = Lanes::new();
        for lane in iter {
            lanes.insert(lane);
        }
        lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(name: &str, control_x: f32) -> Lane {
        Lane {
            name: name.to_string(),
            path: QuadraticBezier::new(
                Vec3::new(0.0, 0.0, 100.0),
                Vec3::new(control_x, 0.0, 50.0),
                Vec3::ZERO,
            ),
            color: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let lanes: Lanes = vec![lane("left_winger", -50.0), lane("center_forward", 0.0), lane("right_winger", 50.0)]
            .into_iter()
            .collect();

        let names: Vec<&str> = lanes.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["left_winger", "center_forward", "right_winger"]);
        assert_eq!(lanes.get(0).map(|l| l.path.control.x), Some(-50.0));
    }

    #[test]
    fn unique_build_rejects_repeated_names() {
        let config = vec![lane("left_winger", -50.0), lane("left_winger", 0.0), lane("right_winger", 50.0)];

        let err = Lanes::from_unique(&config).unwrap_err();
        assert!(err.contains("left_winger"), "{}", err);

        let lanes = Lanes::from_unique(&config[1..]).unwrap();
        assert_eq!(lanes.len(), 2);
    }

    #[test]
    fn position_on_missing_lane_is_none() {
        let lanes: Lanes = vec![lane("only", 10.0)].into_iter().collect();

        assert_eq!(lanes.position_at(0, 0.0), Some(Vec3::new(0.0, 0.0, 100.0)));
        assert_eq!(lanes.position_at(1, 0.0), None);
    }

    #[test]
    fn reinserting_a_name_replaces_in_place() {
        let mut lanes: Lanes = vec![lane("a", 1.0), lane("b", 2.0)].into_iter().collect();
        lanes.insert(lane("a", 3.0));

        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes.get(0).map(|l| l.path.control.x), Some(3.0));
    }
}
