//! In-memory editable mesh topology.
//!
//! [`EditMesh`] is a small, index-based vertex/edge/face store implementing
//! [`MeshGraph`]. It plays the role of the host's editable working copy:
//! it keeps incidence lists in insertion order (so traversal is
//! deterministic), tracks selection and the active vertex, creates missing
//! boundary edges when a face is added, and restores consistent face
//! winding on [`MeshGraph::recalc_normals`].
//!
//! Removed edges and faces are tombstoned; their ids are never reused.

use std::collections::VecDeque;

use hashbrown::HashSet;
use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::graph::MeshGraph;
use crate::topology::point::{EdgeId, FaceId, VertexId};

#[derive(Clone, Debug, Default)]
struct VertexSlot {
    edges: Vec<EdgeId>,
    faces: Vec<FaceId>,
    selected: bool,
}

#[derive(Clone, Debug)]
struct EdgeSlot {
    verts: [VertexId; 2],
}

#[derive(Clone, Debug)]
struct FaceSlot {
    verts: Vec<VertexId>,
}

/// Editable vertex/edge/face topology with selection state.
#[derive(Clone, Debug, Default)]
pub struct EditMesh {
    vertices: Vec<VertexSlot>,
    edges: Vec<Option<EdgeSlot>>,
    faces: Vec<Option<FaceSlot>>,
    active: Option<VertexId>,
}

impl EditMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with `n` isolated vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertices: vec![VertexSlot::default(); n],
            ..Self::default()
        }
    }

    /// Builds a mesh with `n` vertices and the given edges.
    ///
    /// # Example
    /// ```rust
    /// use snake_fill::topology::edit_mesh::EditMesh;
    /// let mesh = EditMesh::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(mesh.num_edges(), 2);
    /// ```
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut mesh = Self::with_vertices(n);
        for (a, b) in edges {
            mesh.add_edge(VertexId::new(a), VertexId::new(b))?;
        }
        Ok(mesh)
    }

    /// A linear chain `0 – 1 – … – (n-1)`.
    pub fn chain(n: usize) -> Self {
        let mut mesh = Self::with_vertices(n);
        for i in 1..n {
            mesh.insert_edge(VertexId::from_index(i - 1), VertexId::from_index(i));
        }
        mesh
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.vertices.push(VertexSlot::default());
        VertexId::from_index(self.vertices.len() - 1)
    }

    /// Connects `a` and `b`. Self-loops and duplicate edges are rejected.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, MeshError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if a == b {
            return Err(MeshError::SelfLoop(a));
        }
        if self.edge_between(a, b).is_some() {
            return Err(MeshError::EdgeExists { a, b });
        }
        Ok(self.insert_edge(a, b))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    pub fn num_edges(&self) -> usize {
        self.edges.iter().flatten().count()
    }

    /// Number of live faces.
    pub fn num_faces(&self) -> usize {
        self.faces.iter().flatten().count()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::from_index)
    }

    /// Live edge ids in creation order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .positions(Option::is_some)
            .map(EdgeId::from_index)
    }

    /// Live face ids in creation order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces
            .iter()
            .positions(Option::is_some)
            .map(FaceId::from_index)
    }

    pub fn select(&mut self, v: VertexId) -> Result<(), MeshError> {
        self.check_vertex(v)?;
        self.vertices[v.index()].selected = true;
        Ok(())
    }

    pub fn select_all(&mut self) {
        for slot in &mut self.vertices {
            slot.selected = true;
        }
    }

    /// Clears the selection and the active vertex.
    pub fn deselect_all(&mut self) {
        for slot in &mut self.vertices {
            slot.selected = false;
        }
        self.active = None;
    }

    pub fn is_selected(&self, v: VertexId) -> bool {
        self.vertices.get(v.index()).is_some_and(|s| s.selected)
    }

    /// Selected vertices in id order.
    pub fn selected(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .positions(|s| s.selected)
            .map(VertexId::from_index)
            .collect()
    }

    /// Marks `v` as the active vertex (selecting it as well), or clears it.
    pub fn set_active(&mut self, v: Option<VertexId>) -> Result<(), MeshError> {
        if let Some(v) = v {
            self.select(v)?;
        }
        self.active = v;
        Ok(())
    }

    pub fn active(&self) -> Option<VertexId> {
        self.active
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), MeshError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(MeshError::UnknownVertex(v))
        }
    }

    fn insert_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let e = EdgeId::from_index(self.edges.len());
        self.edges.push(Some(EdgeSlot { verts: [a, b] }));
        self.vertices[a.index()].edges.push(e);
        self.vertices[b.index()].edges.push(e);
        e
    }

    fn kill_face(&mut self, f: FaceId) {
        if let Some(face) = self.faces.get_mut(f.index()).and_then(Option::take) {
            for v in face.verts {
                self.vertices[v.index()].faces.retain(|&g| g != f);
            }
        }
    }

    /// `Some(true)` if face `f` walks `a → b`, `Some(false)` if it walks
    /// `b → a`, `None` if `a`–`b` is not one of its sides.
    fn side_direction(&self, f: FaceId, a: VertexId, b: VertexId) -> Option<bool> {
        let verts = &self.faces.get(f.index())?.as_ref()?.verts;
        verts
            .iter()
            .circular_tuple_windows()
            .find_map(|(&x, &y)| {
                if (x, y) == (a, b) {
                    Some(true)
                } else if (x, y) == (b, a) {
                    Some(false)
                } else {
                    None
                }
            })
    }
}

impl MeshGraph for EditMesh {
    type EdgeIter<'a> = std::iter::Copied<std::slice::Iter<'a, EdgeId>>;
    type FaceIter<'a> = std::iter::Copied<std::slice::Iter<'a, FaceId>>;

    fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.vertices.len()
    }

    fn incident_edges<'a>(&'a self, v: VertexId) -> Self::EdgeIter<'a> {
        self.vertices
            .get(v.index())
            .map_or(&[][..], |s| s.edges.as_slice())
            .iter()
            .copied()
    }

    fn incident_faces<'a>(&'a self, v: VertexId) -> Self::FaceIter<'a> {
        self.vertices
            .get(v.index())
            .map_or(&[][..], |s| s.faces.as_slice())
            .iter()
            .copied()
    }

    fn edge_vertices(&self, e: EdgeId) -> Option<[VertexId; 2]> {
        self.edges.get(e.index())?.as_ref().map(|s| s.verts)
    }

    fn face_vertices(&self, f: FaceId) -> Option<&[VertexId]> {
        self.faces
            .get(f.index())?
            .as_ref()
            .map(|s| s.verts.as_slice())
    }

    /// Adds a face, creating any missing side edges.
    fn create_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::FaceTooSmall {
                len: vertices.len(),
            });
        }
        let mut seen = HashSet::with_capacity(vertices.len());
        for &v in vertices {
            self.check_vertex(v)?;
            if !seen.insert(v) {
                return Err(MeshError::DuplicateFaceVertex { vertex: v });
            }
        }
        if self.has_face(vertices) {
            return Err(MeshError::FaceExists {
                vertices: vertices.to_vec(),
            });
        }

        for (&a, &b) in vertices.iter().circular_tuple_windows() {
            if self.edge_between(a, b).is_none() {
                self.insert_edge(a, b);
            }
        }
        let f = FaceId::from_index(self.faces.len());
        self.faces.push(Some(FaceSlot {
            verts: vertices.to_vec(),
        }));
        for &v in vertices {
            self.vertices[v.index()].faces.push(f);
        }
        crate::debug_invariants!(self.validate_invariants(), "EditMesh::create_face");
        Ok(f)
    }

    /// Removes the edge together with every face that uses it as a side.
    fn remove_edge(&mut self, e: EdgeId) -> Result<(), MeshError> {
        let [a, b] = self.edge_vertices(e).ok_or(MeshError::UnknownEdge(e))?;
        let doomed = self.edge_faces(e);
        if !doomed.is_empty() {
            log::debug!("removing edge {e} also removes faces {doomed:?}");
        }
        for f in doomed {
            self.kill_face(f);
        }
        self.vertices[a.index()].edges.retain(|&x| x != e);
        self.vertices[b.index()].edges.retain(|&x| x != e);
        self.edges[e.index()] = None;
        crate::debug_invariants!(self.validate_invariants(), "EditMesh::remove_edge");
        Ok(())
    }

    /// Makes face winding consistent across each connected face component.
    ///
    /// Two faces sharing a side must walk it in opposite directions. The
    /// lowest face id of every component keeps its winding and the rest are
    /// flipped to agree with it. Non-orientable components are left as the
    /// propagation finds them.
    fn recalc_normals(&mut self) {
        let mut visited: HashSet<FaceId> = HashSet::new();
        let seeds: Vec<FaceId> = self.face_ids().collect();
        let mut flipped = 0usize;
        for seed in seeds {
            if !visited.insert(seed) {
                continue;
            }
            let mut queue = VecDeque::from([seed]);
            while let Some(f) = queue.pop_front() {
                let sides: Vec<(VertexId, VertexId)> = match self.face_vertices(f) {
                    Some(verts) => verts
                        .iter()
                        .copied()
                        .circular_tuple_windows()
                        .collect(),
                    None => continue,
                };
                for (a, b) in sides {
                    let neighbours: Vec<FaceId> =
                        self.incident_faces(a).filter(|&g| g != f).collect();
                    for g in neighbours {
                        let Some(same_way) = self.side_direction(g, a, b) else {
                            continue;
                        };
                        if visited.insert(g) {
                            if same_way {
                                if let Some(Some(face)) = self.faces.get_mut(g.index()) {
                                    face.verts.reverse();
                                    flipped += 1;
                                }
                            }
                            queue.push_back(g);
                        } else if same_way {
                            log::debug!("faces {f} and {g} cannot be oriented consistently");
                        }
                    }
                }
            }
        }
        log::debug!("recalc_normals: flipped {flipped} face(s)");
    }
}

impl DebugInvariants for EditMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "EditMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        let mut pairs: HashSet<(VertexId, VertexId)> = HashSet::new();
        for e in self.edge_ids() {
            let [a, b] = self.edge_vertices(e).ok_or(MeshError::UnknownEdge(e))?;
            for v in [a, b] {
                let hits = self.incident_edges(v).filter(|&x| x == e).count();
                if hits != 1 {
                    return Err(MeshError::InvariantViolation(format!(
                        "edge {e} listed {hits} time(s) at vertex {v}"
                    )));
                }
            }
            if !pairs.insert((a.min(b), a.max(b))) {
                return Err(MeshError::InvariantViolation(format!(
                    "vertices {a} and {b} are connected twice"
                )));
            }
        }
        for v in self.vertex_ids() {
            for e in self.incident_edges(v) {
                if self.other_endpoint(e, v).is_none() {
                    return Err(MeshError::InvariantViolation(format!(
                        "vertex {v} lists edge {e} that does not touch it"
                    )));
                }
            }
            for f in self.incident_faces(v) {
                if !self.face_vertices(f).is_some_and(|fv| fv.contains(&v)) {
                    return Err(MeshError::InvariantViolation(format!(
                        "vertex {v} lists face {f} that does not use it"
                    )));
                }
            }
        }
        for f in self.face_ids() {
            let verts = self.face_vertices(f).ok_or(MeshError::UnknownFace(f))?;
            for (&a, &b) in verts.iter().circular_tuple_windows() {
                if !self.incident_faces(a).contains(&f) {
                    return Err(MeshError::InvariantViolation(format!(
                        "face {f} is missing from vertex {a}"
                    )));
                }
                if self.edge_between(a, b).is_none() {
                    return Err(MeshError::InvariantViolation(format!(
                        "face {f} side {a}-{b} has no edge"
                    )));
                }
            }
        }
        Ok(())
    }
}
