//! Per-step highlight descriptors
//!
//! A [`Highlight`] names the array indices that play a role in the step that
//! produced it. It is handed to the renderer and then discarded.

/// Visual role of a highlighted index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pivot,
    /// Primary scan pointer (`i`)
    Scan,
    /// Secondary scan pointer (`j`)
    Probe,
    /// Endpoint of a swap or shift
    Swap,
}

/// Indices touched by one step; absent roles are `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    pub pivot: Option<usize>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    pub swap_a: Option<usize>,
    pub swap_b: Option<usize>,
}

impl Highlight {
    pub fn new() -> Self {
        Highlight::default()
    }

    pub fn pivot(index: usize) -> Self {
        Highlight::default().with_pivot(index)
    }

    pub fn scan(i: usize) -> Self {
        Highlight::default().with_i(i)
    }

    /// Two indices being compared
    pub fn compare(i: usize, j: usize) -> Self {
        Highlight::default().with_i(i).with_j(j)
    }

    /// Two indices being exchanged or shifted
    pub fn swap(a: usize, b: usize) -> Self {
        Highlight::default().with_swap(a, b)
    }

    pub fn with_pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    pub fn with_i(mut self, index: usize) -> Self {
        self.i = Some(index);
        self
    }

    /// Set `i` to `index`, clearing it when `None`
    pub fn with_optional_i(mut self, index: Option<usize>) -> Self {
        self.i = index;
        self
    }

    pub fn with_j(mut self, index: usize) -> Self {
        self.j = Some(index);
        self
    }

    pub fn with_swap(mut self, a: usize, b: usize) -> Self {
        self.swap_a = Some(a);
        self.swap_b = Some(b);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.indices().next().is_none()
    }

    /// All present indices, in role order
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        [self.pivot, self.i, self.j, self.swap_a, self.swap_b]
            .into_iter()
            .flatten()
    }

    /// Role used to color `index`; pivot wins over `i`, `i` over `j`, `j` over swaps
    pub fn role_at(&self, index: usize) -> Option<Role> {
        let at = Some(index);
        if self.pivot == at {
            Some(Role::Pivot)
        } else if self.i == at {
            Some(Role::Scan)
        } else if self.j == at {
            Some(Role::Probe)
        } else if self.swap_a == at || self.swap_b == at {
            Some(Role::Swap)
        } else {
            None
        }
    }
}
