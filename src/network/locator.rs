use crate::collections::FxIndexMap;
use crate::errors::SearchError;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;


/// Maps an arbitrary projected point to the closest network node
/// The tree stores indices into the coordinate map
pub struct NodeLocator<'a, N> {
    coordinates: &'a FxIndexMap<N, (f64, f64)>,
    tree: KdTree<f64, usize, [f64; 2]>,
}

impl<'a, N> NodeLocator<'a, N> {

    /// Index every node of the coordinate map
    /// Fails on non-finite coordinates
    pub fn new(coordinates: &'a FxIndexMap<N, (f64, f64)>) -> Result<Self, SearchError> {
        let mut tree = KdTree::new(2);
        for (index, (_, &(x, y))) in coordinates.iter().enumerate() {
            tree.add([x, y], index)?;
        }

        Ok(Self { coordinates, tree })
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Closest node to (x, y), None when no node has coordinates
    pub fn nearest(&self, x: f64, y: f64) -> Result<Option<&'a N>, SearchError> {
        let closest: Vec<(f64, &usize)> = self.tree.nearest(&[x, y], 1, &squared_euclidean)?;

        Ok(closest
            .first()
            .and_then(|&(_, &index)| self.coordinates.get_index(index))
            .map(|(node, _)| node))
    }
}
