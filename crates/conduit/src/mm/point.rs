use bytemuck::{Pod, Zeroable};

/// A 2D point.
///
/// `N` can be any number type. Screen-space debug drawing uses the default
/// `Point<i32>`; world-space callers may pick a float.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<N = i32> {
    pub x: N,
    pub y: N,
}

impl<N> Point<N> {
    #[inline]
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N> From<(N, N)> for Point<N> {
    #[inline]
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N> From<[N; 2]> for Point<N> {
    #[inline]
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N> From<Point<N>> for (N, N) {
    #[inline]
    fn from(p: Point<N>) -> Self {
        (p.x, p.y)
    }
}

// Two fields of the same type under repr(C): no padding.
unsafe impl<N: Zeroable> Zeroable for Point<N> {}
unsafe impl<N: Pod> Pod for Point<N> {}
