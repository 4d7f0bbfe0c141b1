use crate::io::error::{PuzzleError, Result, inconsistent};
use crate::spatial::border::Border;
use crate::spatial::tiles::{Tile, TileId};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Most neighbours a tile can have in a square arrangement
pub const MAX_NEIGHBORS: usize = 4;

/// Neighbour count of a corner tile
pub const CORNER_NEIGHBORS: usize = 2;

/// Undirected relation between tiles that share an edge in some orientation
#[derive(Clone, Debug)]
pub struct NeighborGraph {
    tiles: BTreeMap<TileId, Tile>,
    neighbors: BTreeMap<TileId, BTreeSet<TileId>>,
    shared_borders: BTreeMap<TileId, HashSet<Border>>,
}

/// Accumulator threaded through the discovery fold
#[derive(Default)]
struct Discovery {
    tiles: BTreeMap<TileId, Tile>,
    unmatched: HashMap<Border, TileId>,
    matched: HashSet<Border>,
    neighbors: BTreeMap<TileId, BTreeSet<TileId>>,
    shared_borders: BTreeMap<TileId, HashSet<Border>>,
}

impl Discovery {
    fn absorb(mut self, tile: Tile) -> Result<Self> {
        let id = tile.id();
        if self.tiles.contains_key(&id) {
            return Err(inconsistent(&format!("tile {id} appears more than once")));
        }

        self.neighbors.entry(id).or_default();
        self.shared_borders.entry(id).or_default();

        let mut exposed = Vec::new();
        // Palindromic edges read the same both ways and appear twice
        for border in tile.all_borders().into_iter().unique() {
            if self.matched.contains(&border) {
                return Err(inconsistent(&format!(
                    "border {border} of tile {id} is already shared by two other tiles"
                )));
            }

            if let Some(holder) = self.unmatched.remove(&border) {
                trace!("tile {id} meets tile {holder} along {border}");
                self.link(id, holder, &border);
                self.matched.insert(border);
            } else {
                exposed.push(border);
            }
        }

        for border in exposed {
            self.unmatched.insert(border, id);
        }

        self.tiles.insert(id, tile);
        Ok(self)
    }

    fn link(&mut self, a: TileId, b: TileId, border: &Border) {
        for (from, to) in [(a, b), (b, a)] {
            self.neighbors.entry(from).or_default().insert(to);
            self.shared_borders
                .entry(from)
                .or_default()
                .insert(border.clone());
        }
    }
}

impl NeighborGraph {
    /// Pair up tiles that share a border in either reading direction
    ///
    /// Discovery is a single fold over the tiles: each border is either
    /// claimed by an earlier tile still waiting for a partner, or left
    /// exposed for the tiles that follow.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tiles carry the same identifier
    /// - A border would pair more than two tiles
    /// - A tile shares no border while other tiles exist
    /// - A tile ends up with more than four neighbours
    pub fn discover<I>(tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = Tile>,
    {
        let discovery = tiles
            .into_iter()
            .try_fold(Discovery::default(), Discovery::absorb)?;

        let graph = Self {
            tiles: discovery.tiles,
            neighbors: discovery.neighbors,
            shared_borders: discovery.shared_borders,
        };
        graph.validate()?;

        debug!(
            "discovered {} tiles with {} corners",
            graph.len(),
            graph.corners().len()
        );
        Ok(graph)
    }

    fn validate(&self) -> Result<()> {
        let lone_tile = self.len() == 1;
        for (&id, adjacent) in &self.neighbors {
            if adjacent.is_empty() && !lone_tile {
                return Err(inconsistent(&format!(
                    "tile {id} shares no border with any other tile"
                )));
            }
            if adjacent.len() > MAX_NEIGHBORS {
                return Err(inconsistent(&format!(
                    "tile {id} has {} neighbours",
                    adjacent.len()
                )));
            }
        }
        Ok(())
    }

    /// Number of tiles in the graph
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the graph holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by identifier
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Every tile, in ascending identifier order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Neighbours of a tile, in ascending identifier order
    pub fn neighbors(&self, id: TileId) -> impl Iterator<Item = TileId> + '_ {
        self.neighbors.get(&id).into_iter().flatten().copied()
    }

    /// Number of neighbours of a tile
    pub fn degree(&self, id: TileId) -> usize {
        self.neighbors.get(&id).map_or(0, BTreeSet::len)
    }

    /// Borders a tile shares with some neighbour, in both reading directions
    pub fn shared_borders(&self, id: TileId) -> Option<&HashSet<Border>> {
        self.shared_borders.get(&id)
    }

    /// Check whether a border of a tile touches a real neighbour
    pub fn is_shared(&self, id: TileId, border: &Border) -> bool {
        self.shared_borders
            .get(&id)
            .is_some_and(|borders| borders.contains(border))
    }

    /// Tiles with exactly two neighbours, in ascending identifier order
    pub fn corners(&self) -> Vec<TileId> {
        self.neighbors
            .iter()
            .filter(|(_, adjacent)| adjacent.len() == CORNER_NEIGHBORS)
            .map(|(&id, _)| id)
            .collect()
    }

    /// The four corner identifiers of a square arrangement
    ///
    /// # Errors
    ///
    /// Returns an error if the graph does not have exactly four corners
    pub fn four_corners(&self) -> Result<[TileId; 4]> {
        let corners = self.corners();
        let count = corners.len();
        <[TileId; 4]>::try_from(corners).map_err(|_corners| PuzzleError::InconsistentTiling {
            reason: format!("expected 4 corner tiles, found {count}"),
        })
    }
}
