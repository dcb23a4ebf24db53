//! Arena-indexed union-find used during maze generation.

/// A disjoint-set forest over flattened cell indices.
///
/// Parents and ranks live in flat arrays addressed by `y * cols + x`,
/// avoiding pointer-linked nodes entirely. The forest exists only while
/// generation runs and is dropped once the grid is final.
#[derive(Debug)]
pub struct DisjointSetForest {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSetForest {
    /// Create a forest of `len` singleton sets, each its own parent at rank 0.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            rank: vec![0; len],
        }
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the set root of `i`, re-pointing every visited node directly
    /// at the root.
    pub fn find(&mut self, i: u32) -> u32 {
        let mut root = i;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cursor = i;
        while cursor != root {
            let next = self.parent[cursor as usize];
            self.parent[cursor as usize] = root;
            cursor = next;
        }
        root
    }

    /// Union the sets containing `a` and `b` by rank: the lower-rank root
    /// is attached under the higher-rank root, ties increment the
    /// surviving root's rank.
    ///
    /// Returns `true` if the sets were distinct and have been merged,
    /// `false` if `a` and `b` already share a root.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.rank[root_a as usize] > self.rank[root_b as usize] {
            self.parent[root_b as usize] = root_a;
        } else {
            self.parent[root_a as usize] = root_b;
            if self.rank[root_a as usize] == self.rank[root_b as usize] {
                self.rank[root_b as usize] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_have_distinct_roots() {
        let mut forest = DisjointSetForest::new(4);
        let roots: Vec<_> = (0..4).map(|i| forest.find(i)).collect();
        assert_eq!(roots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn union_merges_and_reports() {
        let mut forest = DisjointSetForest::new(4);
        assert!(forest.union(0, 1));
        assert!(!forest.union(0, 1));
        assert_eq!(forest.find(0), forest.find(1));
        assert_ne!(forest.find(0), forest.find(2));
    }

    #[test]
    fn union_is_transitive() {
        let mut forest = DisjointSetForest::new(6);
        assert!(forest.union(0, 1));
        assert!(forest.union(2, 3));
        assert!(forest.union(1, 2));
        assert_eq!(forest.find(0), forest.find(3));
        assert!(!forest.union(3, 0));
    }

    #[test]
    fn chain_of_unions_leaves_one_set() {
        let mut forest = DisjointSetForest::new(16);
        let mut merges = 0;
        for i in 1..16 {
            if forest.union(i - 1, i) {
                merges += 1;
            }
        }
        assert_eq!(merges, 15);
        let root = forest.find(0);
        assert!((0..16).all(|i| forest.find(i) == root));
    }
}
