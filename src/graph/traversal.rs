//! Graph traversal iterators.
//!
//! Both walks keep a `visited` flag per vertex and scan adjacency rows in
//! ascending order, so their output is fully determined by the matrix and the
//! start vertex.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Graph;

/// Marker for `Frame::next` while the start vertex hasn't been yielded yet.
const NOT_YIELDED: usize = usize::MAX;

/// Depth-first walk created by [`Graph::depth_first_traversal`].
///
/// Yields vertices in the same order as the recursive formulation: visit a
/// vertex, then fully explore each unvisited neighbor in ascending order
/// before moving on to the next one. The recursion is kept on an explicit
/// stack of frames so deep graphs can't overflow the call stack.
#[derive(Clone, Debug)]
pub struct DepthFirst<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

/// A vertex being explored and the first neighbor index not yet scanned.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    next: usize,
}

impl<'a> DepthFirst<'a> {
    pub(super) fn new(graph: &'a Graph, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        visited[start] = true;

        Self {
            graph,
            visited,
            stack: vec![Frame {
                vertex: start,
                next: NOT_YIELDED,
            }],
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(frame) = self.stack.last_mut() {
            if frame.next == NOT_YIELDED {
                frame.next = 0;
                return Some(frame.vertex);
            }

            let row = self.graph.row(frame.vertex);
            let visited = &self.visited;
            let unvisited = (frame.next..row.len()).find(|&v| row[v] && !visited[v]);

            match unvisited {
                Some(neighbor) => {
                    frame.next = neighbor + 1;
                    self.visited[neighbor] = true;
                    self.stack.push(Frame {
                        vertex: neighbor,
                        next: 0,
                    });
                    return Some(neighbor);
                }
                // Every neighbor is done, backtrack.
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

impl FusedIterator for DepthFirst<'_> {}

/// Breadth-first walk created by [`Graph::breadth_first_traversal`].
///
/// Vertices are marked visited when they are queued rather than when they are
/// yielded, so no vertex is ever queued twice.
#[derive(Clone, Debug)]
pub struct BreadthFirst<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> BreadthFirst<'a> {
    pub(super) fn new(graph: &'a Graph, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        visited[start] = true;

        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let vertex = self.queue.pop_front()?;

        for (neighbor, &adjacent) in self.graph.row(vertex).iter().enumerate() {
            if adjacent && !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.push_back(neighbor);
            }
        }

        Some(vertex)
    }
}

impl FusedIterator for BreadthFirst<'_> {}
