//! Board container holding at most one actor per cell
//!
//! The board owns every actor placed on it. Cells store arena ids, an empty
//! cell stands for the Empty placeholder, and a bitmask tracks which cells are
//! fixed for the rest of the run.

use crate::actors::{Actor, ActorId, ActorKind};
use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::spatial::geometry::{BoardShape, Position};
use bitvec::prelude::*;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Button covering a cell before the player reveals it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cover {
    /// Covered by a button with the given weathering variant
    Covered(u8),
    /// Nothing covers the cell
    Cleared,
}

/// Fixed-size grid of cells with an arena of placed actors
#[derive(Clone, Debug)]
pub struct Board {
    shape: BoardShape,
    /// Occupant of each cell indexed as `[row, col]`
    cells: Array2<Option<ActorId>>,
    /// Row-major fixed flag per cell
    fixed: BitVec,
    covers: Array2<Cover>,
    actors: Vec<Actor>,
}

impl Board {
    /// Create a board where every cell holds the Empty placeholder
    pub fn new(shape: BoardShape) -> Self {
        Self {
            shape,
            cells: Array2::from_elem((shape.height, shape.width), None),
            fixed: bitvec![0; shape.cell_count()],
            covers: Array2::from_elem((shape.height, shape.width), Cover::Cleared),
            actors: Vec::new(),
        }
    }

    /// Board dimensions
    pub const fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.shape.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.shape.height
    }

    /// Id of the actor at a position, `None` for the Empty placeholder
    pub fn occupant(&self, pos: Position) -> Option<ActorId> {
        self.cells.get([pos.y, pos.x]).copied().flatten()
    }

    /// Actor at a position, `None` for the Empty placeholder
    pub fn get(&self, pos: Position) -> Option<&Actor> {
        self.occupant(pos).and_then(|id| self.actor(id))
    }

    /// Kind at a position, [`ActorKind::Empty`] for unoccupied cells
    pub fn kind_at(&self, pos: Position) -> ActorKind {
        self.get(pos).map_or(ActorKind::Empty, |actor| actor.kind)
    }

    /// Actor by id
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Mutable actor by id
    ///
    /// Position and lock state are owned by the board and must not be edited
    /// through this reference.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index())
    }

    /// Number of actors placed so far
    pub const fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// All placed actors in creation order
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, actor)| (ActorId(index), actor))
    }

    /// Placed actors of one kind in creation order, with their positions
    pub fn actors_of(&self, kind: ActorKind) -> impl Iterator<Item = (ActorId, Position)> + '_ {
        self.actors().filter_map(move |(id, actor)| {
            (actor.kind == kind)
                .then_some(actor.position)
                .flatten()
                .map(|pos| (id, pos))
        })
    }

    /// Place an actor into an empty, unfixed cell
    ///
    /// # Errors
    ///
    /// Returns an error if the position is off the board, already occupied,
    /// or fixed
    pub fn set(&mut self, pos: Position, mut actor: Actor) -> Result<ActorId> {
        if !self.shape.contains(pos) {
            return Err(invalid_parameter(
                "position",
                &pos,
                &"position lies outside the board",
            ));
        }
        if self.is_fixed(pos) {
            return Err(invariant_violation(
                "set",
                &format!("cell {pos} is fixed"),
            ));
        }
        if let Some(existing) = self.occupant(pos) {
            return Err(invariant_violation(
                "set",
                &format!("cell {pos} is already held by actor {existing}"),
            ));
        }

        let id = ActorId(self.actors.len());
        actor.position = Some(pos);
        actor.locked = false;
        self.actors.push(actor);
        if let Some(cell) = self.cells.get_mut([pos.y, pos.x]) {
            *cell = Some(id);
        }
        Ok(id)
    }

    /// Exchange the contents of two cells
    ///
    /// Either cell may hold the Empty placeholder. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns an error if either position is off the board, either cell is
    /// fixed, or either occupant is locked
    pub fn swap(&mut self, a: Position, b: Position) -> Result<()> {
        for pos in [a, b] {
            if !self.shape.contains(pos) {
                return Err(invalid_parameter(
                    "position",
                    &pos,
                    &"position lies outside the board",
                ));
            }
            if self.is_fixed(pos) {
                return Err(invariant_violation(
                    "swap",
                    &format!("cell {pos} is fixed"),
                ));
            }
            if self.get(pos).is_some_and(|actor| actor.locked) {
                return Err(invariant_violation(
                    "swap",
                    &format!("actor at {pos} is locked"),
                ));
            }
        }
        if a == b {
            return Ok(());
        }

        let first = self.occupant(a);
        let second = self.occupant(b);
        if let Some(cell) = self.cells.get_mut([a.y, a.x]) {
            *cell = second;
        }
        if let Some(cell) = self.cells.get_mut([b.y, b.x]) {
            *cell = first;
        }
        if let Some(actor) = first.and_then(|id| self.actors.get_mut(id.index())) {
            actor.position = Some(b);
        }
        if let Some(actor) = second.and_then(|id| self.actors.get_mut(id.index())) {
            actor.position = Some(a);
        }
        Ok(())
    }

    /// Positions holding the Empty placeholder, in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.shape
            .positions()
            .filter(|&pos| self.occupant(pos).is_none())
            .collect()
    }

    /// Number of cells holding the Empty placeholder
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Whether a cell is fixed for the rest of the run
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.shape.contains(pos)
            && self.fixed.get(self.shape.index_of(pos)).as_deref() == Some(&true)
    }

    /// Cells that the optimizer may still rearrange, in row-major order
    pub fn movable_positions(&self) -> Vec<Position> {
        self.shape
            .positions()
            .filter(|&pos| !self.is_fixed(pos))
            .collect()
    }

    /// Permanently fix an actor and its cell
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not exist or has no position
    pub fn lock(&mut self, id: ActorId) -> Result<()> {
        let actor = self
            .actors
            .get_mut(id.index())
            .ok_or_else(|| invalid_parameter("actor", &id, &"no such actor"))?;
        let pos = actor
            .position
            .ok_or_else(|| invariant_violation("lock", &format!("actor {id} is not placed")))?;
        actor.locked = true;
        let index = self.shape.index_of(pos);
        if index < self.fixed.len() {
            self.fixed.set(index, true);
        }
        Ok(())
    }

    /// Fix every cell, including those holding the Empty placeholder
    pub fn lock_all_cells(&mut self) {
        self.fixed.fill(true);
        for actor in &mut self.actors {
            actor.locked = true;
        }
    }

    /// Number of fixed cells
    pub fn fixed_count(&self) -> usize {
        self.fixed.count_ones()
    }

    /// Cover of a cell
    pub fn cover(&self, pos: Position) -> Option<Cover> {
        self.covers.get([pos.y, pos.x]).copied()
    }

    /// Replace the cover of a cell
    pub fn set_cover(&mut self, pos: Position, cover: Cover) {
        if let Some(cell) = self.covers.get_mut([pos.y, pos.x]) {
            *cell = cover;
        }
    }

    /// Verify that cells and actors map onto each other one to one
    ///
    /// # Errors
    ///
    /// Returns an error describing the first mismatch found
    pub fn check_occupancy(&self) -> Result<()> {
        for (id, actor) in self.actors() {
            let pos = actor.position.ok_or_else(|| {
                invariant_violation("check occupancy", &format!("actor {id} has no position"))
            })?;
            if self.occupant(pos) != Some(id) {
                return Err(invariant_violation(
                    "check occupancy",
                    &format!("actor {id} claims {pos} but the cell disagrees"),
                ));
            }
        }

        let occupied = self.cells.iter().filter(|cell| cell.is_some()).count();
        if occupied != self.actors.len() {
            return Err(invariant_violation(
                "check occupancy",
                &format!(
                    "{occupied} occupied cells for {} actors",
                    self.actors.len()
                ),
            ));
        }
        Ok(())
    }
}
