//! Spring-electrical layout over a graph snapshot

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::LayoutConfig;
use crate::error::{KinshipError, Result};
use crate::graph::{GraphSnapshot, SnapshotEdge, SnapshotNode, SELF_TITLE};

/// Distance substituted for coincident points
const MIN_DISTANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle that displaced nodes are clamped into
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Canvas inset by `padding`, capped so the rectangle never inverts
    fn inset(width: f64, height: f64, padding: f64) -> Self {
        let pad = padding.min(width / 2.0).min(height / 2.0);
        Self {
            min: Point::new(pad, pad),
            max: Point::new(width - pad, height - pad),
        }
    }

    fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    fn sample(&self, rng: &mut StdRng) -> Point {
        Point::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
        )
    }
}

/// Mutable state of one layout run
struct Simulation {
    positions: Vec<Point>,
    links: Vec<(usize, usize)>,
    pinned: Option<usize>,
    k: f64,
    bounds: Bounds,
}

impl Simulation {
    /// One round: accumulate forces, then displace every unpinned node
    fn step(&mut self, damping: f64) {
        let n = self.positions.len();
        let mut forces = vec![Point::default(); n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (dx, dy, d) = offset(self.positions[i], self.positions[j]);
                let f = self.k / d * self.k;
                forces[i].x -= f * (dx / d);
                forces[i].y -= f * (dy / d);
            }
        }

        for &(a, b) in &self.links {
            let (dx, dy, d) = offset(self.positions[a], self.positions[b]);
            let f = d / self.k * d;
            let (fx, fy) = (f * (dx / d), f * (dy / d));
            forces[a].x += fx;
            forces[a].y += fy;
            forces[b].x -= fx;
            forces[b].y -= fy;
        }

        for (i, force) in forces.iter().enumerate() {
            if Some(i) == self.pinned {
                continue;
            }
            let p = self.positions[i];
            self.positions[i] = self.bounds.clamp(Point::new(
                displace(p.x, force.x, damping),
                displace(p.y, force.y, damping),
            ));
        }
    }
}

/// Moves one coordinate along its force, staying put when opposing
/// infinite forces cancel into NaN
fn displace(from: f64, force: f64, damping: f64) -> f64 {
    let to = from + force * damping;
    if to.is_nan() {
        from
    } else {
        to
    }
}

/// Vector from `a` to `b` and its length, floored at [`MIN_DISTANCE`]
fn offset(a: Point, b: Point) -> (f64, f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d = dx.hypot(dy);
    (dx, dy, if d == 0.0 { MIN_DISTANCE } else { d })
}

/// Spring-electrical layout of a graph snapshot.
///
/// Every node pair repels with magnitude k²/d and every edge attracts its
/// endpoints with d²/k, where k = √(area / node count). The "我" node is
/// pinned at the canvas center: it exerts forces but is never displaced.
#[derive(Debug, Clone, Default)]
pub struct ForceLayout {
    config: LayoutConfig,
}

impl ForceLayout {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positions keyed by node id.
    ///
    /// Duplicate ids keep their first occurrence; edges naming an unknown id
    /// are ignored.
    pub fn compute(
        &self,
        nodes: &[SnapshotNode],
        edges: &[SnapshotEdge],
        width: f64,
        height: f64,
    ) -> Result<HashMap<String, Point>> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(KinshipError::InvalidCanvas { width, height });
        }
        if nodes.is_empty() {
            return Ok(HashMap::new());
        }

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
        let mut ids: Vec<&str> = Vec::with_capacity(nodes.len());
        for node in nodes {
            if !index.contains_key(node.id.as_str()) {
                index.insert(node.id.as_str(), ids.len());
                ids.push(node.id.as_str());
            }
        }

        let links: Vec<(usize, usize)> = edges
            .iter()
            .filter_map(|e| Some((*index.get(e.from.as_str())?, *index.get(e.to.as_str())?)))
            .collect();
        if links.len() < edges.len() {
            debug!("Ignoring {} edges with unknown endpoints", edges.len() - links.len());
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let center = Point::new(width / 2.0, height / 2.0);
        let bounds = Bounds::inset(width, height, self.config.padding);
        let pinned = index.get(SELF_TITLE).copied();

        let positions = (0..ids.len())
            .map(|i| {
                if Some(i) == pinned {
                    center
                } else {
                    bounds.sample(&mut rng)
                }
            })
            .collect();

        // √w·√h keeps k finite where w·h would overflow
        let k = width.sqrt() * height.sqrt() / (ids.len() as f64).sqrt();
        debug!(
            "Laying out {} nodes, {} edges on {}x{} (k={:.1}, iterations={}, damping={})",
            ids.len(),
            links.len(),
            width,
            height,
            k,
            self.config.iterations,
            self.config.damping
        );

        let mut sim = Simulation {
            positions,
            links,
            pinned,
            k,
            bounds,
        };
        for _ in 0..self.config.iterations {
            sim.step(self.config.damping);
        }

        Ok(ids
            .into_iter()
            .map(str::to_string)
            .zip(sim.positions)
            .collect())
    }

    pub fn compute_snapshot(
        &self,
        snapshot: &GraphSnapshot,
        width: f64,
        height: f64,
    ) -> Result<HashMap<String, Point>> {
        self.compute(&snapshot.nodes, &snapshot.edges, width, height)
    }
}
