// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{cell::Cell, collections::BTreeSet};

use tracing::{debug, trace};

use crate::{
    error::OctreeError,
    geometry::Aabb3,
    numeric::scalar::Scalar,
    octree::{
        config::OctreeConfig,
        element::{Bounded, Intersects},
        stats::QueryStats,
    },
};

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of an element, assigned in insertion order.
pub type ElementId = usize;

/// Unordered element pair, stored as `(low, high)`.
pub type Pair = (ElementId, ElementId);

const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
struct Node<T: Scalar> {
    area: Aabb3<T>,
    items: Vec<ElementId>,
    children: Option<[NodeId; 8]>,
    /// Navigation only; the arena owns every node.
    parent: Option<NodeId>,
    level: usize,
    size: Cell<Option<usize>>,
    depth: Cell<Option<usize>>,
}

impl<T: Scalar> Node<T> {
    fn new(area: Aabb3<T>, parent: Option<NodeId>, level: usize) -> Self {
        Node {
            area,
            items: Vec::new(),
            children: None,
            parent,
            level,
            size: Cell::new(None),
            depth: Cell::new(None),
        }
    }
}

/// An adaptive octree over elements with bounding boxes.
///
/// Elements are stored at the deepest node whose single child octant cannot
/// hold them, so a node with children only keeps elements that straddle (or
/// touch) one of its center planes. A node has either no children or all 8.
///
/// Typical use: size the root from the union of all element boxes, [`add`]
/// every element, call [`msplit`] once, then query with [`intersections`].
///
/// [`add`]: Octree::add
/// [`msplit`]: Octree::msplit
/// [`intersections`]: Octree::intersections
pub struct Octree<E: Bounded> {
    nodes: Vec<Node<E::Scalar>>,
    elements: Vec<E>,
    config: OctreeConfig,
}

impl<E: Bounded> Octree<E> {
    pub fn new(area: Aabb3<E::Scalar>) -> Self {
        Self::with_config(area, OctreeConfig::default())
    }

    pub fn with_config(area: Aabb3<E::Scalar>, config: OctreeConfig) -> Self {
        Octree {
            nodes: vec![Node::new(area, None, 0)],
            elements: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn bounds(&self) -> &Aabb3<E::Scalar> {
        &self.nodes[ROOT.0].area
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn node_area(&self, node: NodeId) -> &Aabb3<E::Scalar> {
        &self.nodes[node.0].area
    }

    /// Elements stored directly at `node`.
    pub fn node_items(&self, node: NodeId) -> &[ElementId] {
        &self.nodes[node.0].items
    }

    pub fn children(&self, node: NodeId) -> Option<[NodeId; 8]> {
        self.nodes[node.0].children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn level(&self, node: NodeId) -> usize {
        self.nodes[node.0].level
    }

    pub fn element(&self, id: ElementId) -> Option<&E> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts an element and returns its id.
    ///
    /// Fails with [`OctreeError::OutOfBounds`] when the element's box is not
    /// inside the root box; the tree is left untouched in that case.
    pub fn add(&mut self, element: E) -> Result<ElementId, OctreeError> {
        let area = element.area();
        let bounds = self.bounds();
        if !bounds.contains(&area) {
            return Err(OctreeError::OutOfBounds {
                min: area.min.to_f64(),
                max: area.max.to_f64(),
                root_min: bounds.min.to_f64(),
                root_max: bounds.max.to_f64(),
            });
        }

        let id = self.elements.len();
        self.elements.push(element);
        let node = self.descend(ROOT, &area);
        self.push_item(node, id);
        Ok(id)
    }

    /// Follows children while `area` fits exactly one octant.
    fn descend(&self, mut node: NodeId, area: &Aabb3<E::Scalar>) -> NodeId {
        let margin = E::Scalar::length_eps();
        while let Some(children) = self.nodes[node.0].children {
            match self.nodes[node.0].area.octant_of(area, margin) {
                Some(octant) => node = children[octant],
                None => break,
            }
        }
        node
    }

    fn push_item(&mut self, node: NodeId, id: ElementId) {
        self.nodes[node.0].items.push(id);
        self.invalidate(node);
    }

    /// Drops the cached aggregates of `node` and all its ancestors.
    fn invalidate(&self, node: NodeId) {
        let mut current = Some(node);
        while let Some(id) = current {
            let n = &self.nodes[id.0];
            n.size.set(None);
            n.depth.set(None);
            current = n.parent;
        }
    }

    /// One subdivision pass over the whole tree. Returns the number of
    /// leaves that were split.
    pub fn split(&mut self) -> usize {
        self.split_node(ROOT)
    }

    fn split_node(&mut self, node: NodeId) -> usize {
        if let Some(children) = self.nodes[node.0].children {
            return children.iter().map(|c| self.split_node(*c)).sum();
        }
        usize::from(self.split_leaf(node))
    }

    fn split_leaf(&mut self, node: NodeId) -> bool {
        let config = self.config;
        let leaf = &self.nodes[node.0];
        if leaf.items.len() < config.min_split_items || leaf.level >= config.max_depth {
            return false;
        }

        let margin = E::Scalar::length_eps();
        let placement: Vec<Option<usize>> = leaf
            .items
            .iter()
            .map(|&id| leaf.area.octant_of(&self.elements[id].area(), margin))
            .collect();
        let staying = placement.iter().filter(|p| p.is_none()).count();
        if !config.should_split(staying, leaf.items.len()) {
            return false;
        }

        let octants = leaf.area.octants();
        let level = leaf.level + 1;
        let first = self.nodes.len();
        let children: [NodeId; 8] = std::array::from_fn(|i| NodeId(first + i));
        self.nodes.extend(
            octants
                .into_iter()
                .map(|area| Node::new(area, Some(node), level)),
        );

        let items = std::mem::take(&mut self.nodes[node.0].items);
        let total = items.len();
        let mut kept = Vec::with_capacity(staying);
        for (id, slot) in items.into_iter().zip(placement) {
            match slot {
                Some(octant) => self.nodes[children[octant].0].items.push(id),
                None => kept.push(id),
            }
        }

        let parent = &mut self.nodes[node.0];
        parent.items = kept;
        parent.children = Some(children);
        self.invalidate(node);

        trace!(node = node.0, level, total, staying, "split octree leaf");
        true
    }

    /// Splits until a pass changes nothing. Returns the total number of
    /// splits, so a second call returns 0.
    pub fn msplit(&mut self) -> usize {
        let mut total = 0;
        let mut passes = 0;
        loop {
            let splits = self.split();
            passes += 1;
            total += splits;
            if splits == 0 {
                break;
            }
        }
        debug!(
            passes,
            splits = total,
            nodes = self.nodes.len(),
            depth = self.depth(),
            "octree subdivision reached a fixpoint"
        );
        total
    }

    /// Number of elements in the tree.
    pub fn size(&self) -> usize {
        self.node_size(ROOT)
    }

    /// Number of elements stored in the subtree rooted at `node`.
    pub fn node_size(&self, node: NodeId) -> usize {
        let n = &self.nodes[node.0];
        if let Some(size) = n.size.get() {
            return size;
        }
        let below: usize = n
            .children
            .map_or(0, |cs| cs.iter().map(|c| self.node_size(*c)).sum());
        let size = n.items.len() + below;
        n.size.set(Some(size));
        size
    }

    /// Number of levels in the tree; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        self.node_depth(ROOT)
    }

    pub fn node_depth(&self, node: NodeId) -> usize {
        let n = &self.nodes[node.0];
        if let Some(depth) = n.depth.get() {
            return depth;
        }
        let below = n.children.map_or(0, |cs| {
            cs.iter().map(|c| self.node_depth(*c)).max().unwrap_or(0)
        });
        let depth = below + 1;
        n.depth.set(Some(depth));
        depth
    }

    /// Every intersecting pair, using the elements' own [`Intersects`].
    pub fn intersections(&self) -> BTreeSet<Pair>
    where
        E: Intersects,
    {
        let mut stats = QueryStats::new();
        self.intersections_with(&mut stats, |a, b| a.intersects(b))
    }

    /// Every pair for which `predicate` holds.
    ///
    /// Each node tests its own elements pairwise and against the elements of
    /// all its ancestors. Elements in disjoint subtrees are separated by more
    /// than the length tolerance, so no intersecting pair is skipped. The
    /// predicate always receives the lower id first.
    pub fn intersections_with<F>(&self, stats: &mut QueryStats, mut predicate: F) -> BTreeSet<Pair>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let mut out = BTreeSet::new();
        let mut ancestors = Vec::new();
        self.collect(ROOT, &mut ancestors, &mut out, stats, &mut predicate);
        out
    }

    fn collect<F>(
        &self,
        node: NodeId,
        ancestors: &mut Vec<ElementId>,
        out: &mut BTreeSet<Pair>,
        stats: &mut QueryStats,
        predicate: &mut F,
    ) where
        F: FnMut(&E, &E) -> bool,
    {
        stats.nodes_visited += 1;
        let n = &self.nodes[node.0];
        for (k, &i) in n.items.iter().enumerate() {
            for &j in n.items[k + 1..].iter().chain(ancestors.iter()) {
                test_pair(&self.elements, i, j, out, stats, predicate);
            }
        }

        if let Some(children) = n.children {
            let mark = ancestors.len();
            ancestors.extend_from_slice(&n.items);
            for child in children {
                self.collect(child, ancestors, out, stats, predicate);
            }
            ancestors.truncate(mark);
        }
    }
}

fn test_pair<E, F>(
    elements: &[E],
    i: ElementId,
    j: ElementId,
    out: &mut BTreeSet<Pair>,
    stats: &mut QueryStats,
    predicate: &mut F,
) where
    F: FnMut(&E, &E) -> bool,
{
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let hit = predicate(&elements[lo], &elements[hi]);
    stats.record(hit);
    if hit {
        out.insert((lo, hi));
    }
}

/// The O(n²) reference: tests every pair `(i, j)`, `i < j`.
pub fn brute_force_intersections<E, F>(
    elements: &[E],
    stats: &mut QueryStats,
    mut predicate: F,
) -> BTreeSet<Pair>
where
    F: FnMut(&E, &E) -> bool,
{
    let mut out = BTreeSet::new();
    for i in 0..elements.len() {
        for j in i + 1..elements.len() {
            test_pair(elements, i, j, &mut out, stats, &mut predicate);
        }
    }
    out
}
