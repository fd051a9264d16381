// Copyright (C) 2024 Bellande Artificial Intelligence Computer Vision Research Innovation Center, Ronaldson Bellande

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use rand::prelude::*;
use std::cell::RefCell;

thread_local! {
    static GENERATOR: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Reseeds the generator of the calling thread.
pub fn set_seed(seed: u64) {
    GENERATOR.with(|g| {
        *g.borrow_mut() = StdRng::seed_from_u64(seed);
    });
}

/// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
pub fn randint(low: usize, high: usize) -> usize {
    GENERATOR.with(|g| g.borrow_mut().gen_range(low..=high))
}

pub fn bernoulli(p: f32) -> bool {
    GENERATOR.with(|g| g.borrow_mut().gen::<f32>() < p)
}
