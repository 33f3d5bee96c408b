use thiserror::Error;

/// Index into matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatIndex {
	pub row: usize,
	pub col: usize,
}

impl MatIndex {
	pub const fn transposed(self) -> MatIndex {
		MatIndex { row: self.col, col: self.row }
	}
}

impl From<(usize, usize)> for MatIndex {
    fn from(value: (usize, usize)) -> Self {
        let (row, col) = value;
		Self {
			row,
			col,
		}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatDims {
	/// Number of rows in matrix
	pub rows: usize,
	/// Number of columns in matrix
	pub cols: usize,
}

impl MatDims {
	/// Dimensions of a square `n`x`n` matrix
	pub const fn square(n: usize) -> Self {
		Self {
			rows: n,
			cols: n,
		}
	}

    /// Check if the element at `index` is contained within these dimensions
	#[inline]
	pub const fn contains(&self, index: &MatIndex) -> bool {
		index.row < self.rows && index.col < self.cols
	}

    /// Helper to return an error if index is not [contained](Self::contains) within these dimensions
	#[inline]
	pub fn assert_contains(&self, index: &MatIndex) -> Result<(), OutOfBoundsError> {
		if self.contains(index) {
			Ok(())
		} else {
			Err(OutOfBoundsError {
				dims: *self,
				index: *index,
			})
		}
	}

	#[inline(always)]
	pub const fn compute_offset_unchecked(&self, index: MatIndex) -> usize {
		self.cols * index.row + index.col
	}

	/// Row-major offset of `index`
	#[inline]
	pub fn compute_offset(&self, index: MatIndex) -> Result<usize, OutOfBoundsError> {
		self.assert_contains(&index)?;
		Ok(self.compute_offset_unchecked(index))
	}

	/// Get number of elements in a matrix with these dimensions
	#[inline]
	pub const fn len(&self) -> usize {
		self.rows * self.cols
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index ({}, {}) is outside of a {}x{} matrix", .index.row, .index.col, .dims.rows, .dims.cols)]
pub struct OutOfBoundsError {
	/// Dimensions (that the index was out-of-bounds of)
	pub dims: MatDims,
	/// Out-of-bounds index
	pub index: MatIndex,
}

#[cfg(test)]
mod test {
	use super::{MatDims, MatIndex};

	#[test]
	fn contains_requires_both_axes() {
		let dims = MatDims::square(2);
		assert!(dims.contains(&MatIndex { row: 1, col: 1 }));
		assert!(!dims.contains(&MatIndex { row: 2, col: 0 }));
		assert!(!dims.contains(&MatIndex { row: 0, col: 2 }));
	}

	#[test]
	fn offsets_are_row_major() {
		let dims = MatDims::square(3);
		assert_eq!(dims.compute_offset((0, 2).into()), Ok(2));
		assert_eq!(dims.compute_offset((2, 1).into()), Ok(7));

		let err = dims.compute_offset((3, 0).into()).unwrap_err();
		assert_eq!(err.dims, dims);
		assert_eq!(err.index, MatIndex { row: 3, col: 0 });
	}

	#[test]
	fn transposed_index() {
		let idx = MatIndex::from((1, 2));
		assert_eq!(idx.transposed(), MatIndex { row: 2, col: 1 });
	}
}
