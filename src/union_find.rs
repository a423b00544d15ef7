use crate::error::{PercolationError, Result};

/// Union-Find (Disjoint Sets) data structure over a fixed universe of ids `0..len`
///
/// Weighted quick-union: the root of the smaller tree is attached under the root
/// of the larger one. `find` compresses the whole walked path onto the root.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            count: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn count(&self) -> usize {
        self.count
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        Ok(self.root(x))
    }

    /// Union two sets containing x and y
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        self.validate(x)?;
        self.validate(y)?;

        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return Ok(());
        }

        // Union by size, ties put y under x
        if self.size[root_x] < self.size[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        }
        self.count -= 1;
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.validate(x)?;
        self.validate(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Number of elements in the set containing x
    pub fn size_of(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(PercolationError::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}
