// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Traits shared by the graph and the algorithm data structures.

/// An item with a dense, zero-based index.
///
/// Vertex handles implement this trait so that per-vertex data can be
/// stored in plain vectors (e.g. the heap positions of the priority
/// queue or the distance labels of a shortest path tree).
pub trait Indexable {
    fn index(&self) -> usize;
}

impl Indexable for usize {
    fn index(&self) -> usize {
        *self
    }
}
