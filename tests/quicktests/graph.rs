use classic_ds::{Error, Graph};

use quickcheck::quickcheck;

const EDGES: [(usize, usize); 7] = [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)];

#[test]
fn scenario() -> classic_ds::Result<()> {
    let mut graph = Graph::new(5)?;
    for (u, v) in EDGES {
        graph.add_edge(u, v)?;
    }

    assert_eq!(graph.depth_first_traversal(0)?.collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(graph.breadth_first_traversal(0)?.collect::<Vec<_>>(), [0, 1, 4, 2, 3]);
    assert_eq!(graph.breadth_first_traversal(4)?.collect::<Vec<_>>(), [4, 0, 1, 3, 2]);

    graph.remove_edge(1, 4)?;
    assert!(!graph.has_edge(1, 4)?);
    assert!(!graph.has_edge(4, 1)?);
    assert_eq!(graph.breadth_first_traversal(4)?.collect::<Vec<_>>(), [4, 0, 3, 1, 2]);

    Ok(())
}

#[test]
fn errors_propagate_with_question_mark() {
    fn connect(graph: &mut Graph) -> classic_ds::Result<bool> {
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 9)
    }

    let mut graph = Graph::new(3).unwrap();
    assert_eq!(
        connect(&mut graph),
        Err(Error::InvalidVertex {
            vertex: 9,
            vertex_count: 3
        })
    );
    // The first edge went in, the second one left nothing behind.
    assert_eq!(graph.edge_count(), 1);
}

quickcheck! {
    fn out_of_range_is_invalid(size: u8, u: usize, v: usize) -> bool {
        let size = usize::from(size % 16);
        let mut graph = Graph::new(size).unwrap();
        let before = graph.clone();

        let outcome = graph.add_edge(u, v);
        if u < size && v < size {
            return true;
        }
        matches!(outcome, Err(Error::InvalidVertex { .. })) && graph == before
    }
}

quickcheck! {
    fn traversals_agree_on_reachable_set(edges: Vec<(u8, u8)>, start: u8) -> bool {
        let mut graph = Graph::new(12).unwrap();
        for (u, v) in edges {
            let (u, v) = (usize::from(u % 12), usize::from(v % 12));
            if u != v {
                graph.add_edge(u, v).unwrap();
            }
        }
        let start = usize::from(start % 12);

        let mut dfs: Vec<_> = graph.depth_first_traversal(start).unwrap().collect();
        let mut bfs: Vec<_> = graph.breadth_first_traversal(start).unwrap().collect();
        dfs.sort_unstable();
        bfs.sort_unstable();
        dfs == bfs
    }
}
