//! # Patch Parameterization
//!
//! A [`PatchParam`] is the per-patch descriptor produced by adaptive
//! refinement. It records where a patch sits inside its base face, how deep
//! it was refined and which of its edges border a less refined neighbor
//! (transition edges).
//!
//! The bit layout matches what the tessellation shaders read from their
//! `ivec3` patch parameter, so a slice of `PatchParam` can be uploaded to a
//! GPU buffer as-is:
//!
//! | Field    | Bits    | Content                    |
//! |----------|---------|----------------------------|
//! | `field0` | 0..28   | base face id               |
//! | `field0` | 28..32  | transition mask            |
//! | `field1` | 0..4    | refinement depth           |
//! | `field1` | 4       | non-quad root face         |
//! | `field1` | 5       | regular patch              |
//! | `field1` | 7..12   | boundary mask              |
//! | `field1` | 12..22  | v origin                   |
//! | `field1` | 22..32  | u origin                   |
use bytemuck::{Pod, Zeroable};
use derive_more::Display;

/// One of the four boundary edges of a quad patch.
///
/// The discriminant is the edge's slot in the outer tessellation level
/// vector.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Edge {
    /// The `u = 0` edge.
    #[display("left")]
    Left = 0,
    /// The `v = 0` edge.
    #[display("bottom")]
    Bottom = 1,
    /// The `u = 1` edge.
    #[display("right")]
    Right = 2,
    /// The `v = 1` edge.
    #[display("top")]
    Top = 3,
}

impl Edge {
    /// All edges in outer tessellation level order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Bottom, Edge::Right, Edge::Top];

    /// Slot of this edge in an outer level vector.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit of this edge in the transition (and boundary) mask.
    ///
    /// Masks are stored counter-clockwise starting at the bottom edge while
    /// the outer levels start at the left edge.
    ///
    /// ```
    /// use petite_tess::far::Edge;
    ///
    /// assert_eq!(Edge::Bottom.transition_bit(), 0b0001);
    /// assert_eq!(Edge::Left.transition_bit(), 0b1000);
    /// ```
    #[inline]
    pub fn transition_bit(self) -> u8 {
        1 << ((self as u8 + 3) % 4)
    }
}

const FACE_ID_BITS: u32 = 28;
const TRANSITION_SHIFT: u32 = 28;
const DEPTH_MASK: u32 = 0xf;
const NON_QUAD_SHIFT: u32 = 4;
const REGULAR_SHIFT: u32 = 5;
const BOUNDARY_SHIFT: u32 = 7;
const V_SHIFT: u32 = 12;
const U_SHIFT: u32 = 22;

#[inline]
fn pack(value: u32, width: u32, offset: u32) -> u32 {
    (value & ((1 << width) - 1)) << offset
}

#[inline]
fn unpack(value: u32, width: u32, offset: u32) -> u32 {
    (value >> offset) & ((1 << width) - 1)
}

/// Unpacked fields used to build a [`PatchParam`].
///
/// Values wider than their bit field are truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PatchParamFields {
    pub face_id: u32,
    pub u: u16,
    pub v: u16,
    pub depth: u8,
    pub non_quad: bool,
    pub regular: bool,
    pub boundary: u8,
    pub transition: u8,
    pub sharpness: f32,
}

/// Packed per-patch parameters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PatchParam {
    field0: u32,
    field1: u32,
    sharpness: f32,
}

impl PatchParam {
    /// Create a regular patch at `depth` with the given transition mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use petite_tess::far::{Edge, PatchParam};
    ///
    /// let param = PatchParam::new(2, 0b0101);
    /// assert_eq!(param.depth(), 2);
    /// assert!(param.is_transition_edge(Edge::Bottom));
    /// assert!(param.is_transition_edge(Edge::Top));
    /// assert!(!param.is_transition_edge(Edge::Left));
    /// ```
    pub fn new(depth: u8, transition: u8) -> Self {
        Self::from(PatchParamFields {
            depth,
            transition,
            regular: true,
            ..Default::default()
        })
    }

    /// Rebuild a parameter from its raw shader representation.
    pub fn from_raw(field0: u32, field1: u32, sharpness: f32) -> Self {
        Self {
            field0,
            field1,
            sharpness,
        }
    }

    /// The two packed integer fields.
    pub fn raw(&self) -> [u32; 2] {
        [self.field0, self.field1]
    }

    /// Index of the base face this patch was refined from.
    #[inline]
    pub fn face_id(&self) -> u32 {
        unpack(self.field0, FACE_ID_BITS, 0)
    }

    /// Subdivision depth of the patch.
    #[inline]
    pub fn depth(&self) -> u8 {
        (self.field1 & DEPTH_MASK) as u8
    }

    /// True if the root face of the patch is not a quad.
    #[inline]
    pub fn is_non_quad(&self) -> bool {
        unpack(self.field1, 1, NON_QUAD_SHIFT) != 0
    }

    /// True if the patch is a regular B-spline patch.
    #[inline]
    pub fn is_regular(&self) -> bool {
        unpack(self.field1, 1, REGULAR_SHIFT) != 0
    }

    /// Boundary mask, using the same edge bits as the transition mask.
    #[inline]
    pub fn boundary(&self) -> u8 {
        unpack(self.field1, 5, BOUNDARY_SHIFT) as u8
    }

    /// Transition mask. See [`Edge::transition_bit`].
    #[inline]
    pub fn transition(&self) -> u8 {
        unpack(self.field0, 4, TRANSITION_SHIFT) as u8
    }

    /// Returns true if `edge` borders a less refined neighbor.
    #[inline]
    pub fn is_transition_edge(&self, edge: Edge) -> bool {
        self.transition() & edge.transition_bit() != 0
    }

    /// Integer origin of the patch within its base face.
    pub fn uv(&self) -> (u16, u16) {
        (
            unpack(self.field1, 10, U_SHIFT) as u16,
            unpack(self.field1, 10, V_SHIFT) as u16,
        )
    }

    /// Parametric size of the patch relative to its base face.
    pub fn fraction(&self) -> f32 {
        let depth = self.depth() as i32 - self.is_non_quad() as i32;
        1.0 / 2.0f32.powi(depth)
    }

    /// Crease sharpness of a single-crease patch.
    #[inline]
    pub fn sharpness(&self) -> f32 {
        self.sharpness
    }
}

impl From<PatchParamFields> for PatchParam {
    fn from(fields: PatchParamFields) -> Self {
        let field0 = pack(fields.face_id, FACE_ID_BITS, 0)
            | pack(fields.transition as u32, 4, TRANSITION_SHIFT);
        let field1 = pack(fields.u as u32, 10, U_SHIFT)
            | pack(fields.v as u32, 10, V_SHIFT)
            | pack(fields.boundary as u32, 5, BOUNDARY_SHIFT)
            | pack(fields.regular as u32, 1, REGULAR_SHIFT)
            | pack(fields.non_quad as u32, 1, NON_QUAD_SHIFT)
            | (fields.depth as u32 & DEPTH_MASK);

        Self {
            field0,
            field1,
            sharpness: fields.sharpness,
        }
    }
}

impl From<PatchParam> for PatchParamFields {
    fn from(param: PatchParam) -> Self {
        let (u, v) = param.uv();
        Self {
            face_id: param.face_id(),
            u,
            v,
            depth: param.depth(),
            non_quad: param.is_non_quad(),
            regular: param.is_regular(),
            boundary: param.boundary(),
            transition: param.transition(),
            sharpness: param.sharpness(),
        }
    }
}
