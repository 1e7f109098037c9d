//! Scenario tests for the traversal operations

use std::collections::HashSet;

use vertex_walk::*;

#[test]
fn test_absent_start_results() {
    VertexGraph::<i32>::new(|mut graph| {
        graph.add_vertex(2);

        assert!(graph.enumerate_reachable(None).is_empty());
        assert!(graph.collect_leaves(None).is_empty());
        assert_eq!(graph.max_reachable_value(None), i32::MIN);
        assert!(graph.all_reachable_odd(None));
        assert!(graph.all_reachable_satisfy(None, |_| false));

        let mut emitted = 0;
        graph.visit_and_emit(None, |_| emitted += 1);
        assert_eq!(emitted, 0);
    });
}

#[test]
fn test_self_loop_is_safe_everywhere() {
    VertexGraph::new(|mut graph| {
        let v = graph.add_vertex(3);
        graph.add_edge(v, v);

        assert_eq!(graph.enumerate_reachable(Some(v)), HashSet::from([v]));
        assert!(graph.collect_leaves(Some(v)).is_empty());
        assert_eq!(graph.max_reachable_value(Some(v)), 3);
        assert!(graph.all_reachable_odd(Some(v)));
        assert_eq!(graph.has_strictly_increasing_path(Some(v), Some(v)), Ok(true));

        let mut emitted = Vec::new();
        graph.visit_and_emit(Some(v), |&x| emitted.push(x));
        assert_eq!(emitted, vec![3]);
    });
}

#[test]
fn test_equal_values_are_distinct_vertices() {
    VertexGraph::new(|mut graph| {
        // Three vertices all valued 1: a -> b, b -> c.
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(1);
        let c = graph.add_vertex(1);
        graph.add_edge(a, b);
        graph.add_edge(b, c);

        assert_eq!(graph.enumerate_reachable(Some(a)).len(), 3);
        assert_eq!(graph.collect_leaves(Some(a)), HashSet::from([c]));

        let mut emitted = 0;
        graph.visit_and_emit(Some(a), |_| emitted += 1);
        assert_eq!(emitted, 3);
    });
}

#[test]
fn test_repeated_calls_are_idempotent() {
    VertexGraph::new(|mut graph| {
        let ids: Vec<_> = [7, -2, 9, 4, 11].into_iter().map(|v| graph.add_vertex(v)).collect();
        graph.add_edge(ids[0], ids[1]);
        graph.add_edge(ids[1], ids[2]);
        graph.add_edge(ids[2], ids[0]);
        graph.add_edge(ids[2], ids[3]);
        graph.add_edge(ids[0], ids[4]);

        let start = Some(ids[0]);
        assert_eq!(graph.enumerate_reachable(start), graph.enumerate_reachable(start));
        assert_eq!(graph.collect_leaves(start), graph.collect_leaves(start));
        assert_eq!(graph.max_reachable_value(start), graph.max_reachable_value(start));
        assert_eq!(graph.max_reachable_value(start), 11);

        let mut first = Vec::new();
        let mut second = Vec::new();
        graph.visit_and_emit(start, |&v| first.push(v));
        graph.visit_and_emit(start, |&v| second.push(v));
        assert_eq!(first, second);
        assert_eq!(first, vec![7, -2, 9, 4, 11]);
    });
}

#[test]
fn test_all_odd_flips_on_reachable_even() {
    VertexGraph::new(|mut graph| {
        let odd: Vec<_> = [1, 3, 5].into_iter().map(|v| graph.add_vertex(v)).collect();
        for &from in &odd {
            for &to in &odd {
                if from != to {
                    graph.add_edge(from, to);
                }
            }
        }
        assert!(graph.all_reachable_odd(Some(odd[1])));

        // An unreachable even vertex changes nothing.
        let stray = graph.add_vertex(4);
        assert!(graph.all_reachable_odd(Some(odd[1])));

        graph.add_edge(odd[0], stray);
        assert!(!graph.all_reachable_odd(Some(odd[1])));
    });
}

#[test]
fn test_increasing_path_scenarios() {
    VertexGraph::new(|mut graph| {
        let up: Vec<_> = (1..=4).map(|v| graph.add_vertex(v)).collect();
        let down: Vec<_> = (1..=4).rev().map(|v| graph.add_vertex(v)).collect();
        for w in up.windows(2).chain(down.windows(2)) {
            graph.add_edge(w[0], w[1]);
        }

        assert_eq!(graph.has_strictly_increasing_path(Some(up[0]), Some(up[3])), Ok(true));
        assert_eq!(graph.has_strictly_increasing_path(Some(down[0]), Some(down[3])), Ok(false));
        for &x in up.iter().chain(&down) {
            assert_eq!(graph.has_strictly_increasing_path(Some(x), Some(x)), Ok(true));
        }

        let err = graph.has_strictly_increasing_path(Some(up[0]), None).unwrap_err();
        assert_eq!(err, TraversalError::InvalidArgument { argument: "end" });
        assert!(err.to_string().contains("end"));
    });
}

#[test]
fn test_max_scenarios() {
    VertexGraph::new(|mut graph| {
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(5);
        let c = graph.add_vertex(2);
        let d = graph.add_vertex(10);
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(b, d);
        graph.add_edge(c, d);
        assert_eq!(graph.max_reachable_value(Some(a)), 10);

        let lone = graph.add_vertex(-7);
        assert_eq!(graph.max_reachable_value(Some(lone)), -7);

        // A cycle among negative values crosses a visited vertex and folds in zero.
        let x = graph.add_vertex(-5);
        let y = graph.add_vertex(-3);
        graph.add_edge(x, y);
        graph.add_edge(y, x);
        assert_eq!(graph.max_reachable_value(Some(x)), 0);
    });
}

#[test]
fn test_write_reachable_values_through_trait() {
    VertexGraph::new(|mut graph| {
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        graph.add_edge(a, c);
        graph.add_edge(a, b);

        let mut out = Vec::new();
        graph.write_reachable_values(Some(a), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n3\n2\n");
    });
}

/// A caller-owned representation plugged in through `VertexAccess`.
struct Ring<'brand> {
    values: Vec<u32>,
    next: Vec<[VertexId<'brand>; 1]>,
}

impl<'brand> VertexAccess<'brand> for Ring<'brand> {
    type Value = u32;

    fn vertex_count(&self) -> usize {
        self.values.len()
    }

    fn value(&self, vertex: VertexId<'brand>) -> &u32 {
        &self.values[vertex.index()]
    }

    fn neighbors(&self, vertex: VertexId<'brand>) -> &[VertexId<'brand>] {
        &self.next[vertex.index()]
    }
}

#[test]
fn test_custom_vertex_access() {
    // Borrow ids from a scratch graph so the ring shares its brand.
    VertexGraph::new(|mut ids| {
        let v: Vec<_> = (0..3).map(|i| ids.add_vertex(i)).collect();
        let ring = Ring {
            values: vec![10, 20, 30],
            next: vec![[v[1]], [v[2]], [v[0]]],
        };

        assert_eq!(ring.enumerate_reachable(Some(v[2])).len(), 3);
        assert_eq!(ring.max_reachable_value(Some(v[0])), 30);
        assert!(ring.collect_leaves(Some(v[0])).is_empty());
        assert_eq!(ring.has_strictly_increasing_path(Some(v[0]), Some(v[2])), Ok(true));
        assert_eq!(ring.has_strictly_increasing_path(Some(v[2]), Some(v[1])), Ok(false));
    });
}
