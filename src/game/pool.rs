//! Fixed pool of pipes recycled in place.
//!
//! The pool never grows or shrinks. A pipe that scrolls off the left edge is
//! moved behind the farthest pipe with a fresh gap, which gives an endless
//! obstacle stream from `PIPE_COUNT` values.

use super::types::{Pipe, Viewport};
use crate::core::constants::PIPE_COUNT;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PipePool {
    pipes: [Pipe; PIPE_COUNT],
    viewport: Viewport,
}

impl PipePool {
    /// Lay out a fresh pool off the right edge of the viewport.
    pub fn new<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pipes: Self::initial_pipes(&viewport, rng),
            viewport,
        }
    }

    fn initial_pipes<R: Rng>(viewport: &Viewport, rng: &mut R) -> [Pipe; PIPE_COUNT] {
        let width = viewport.pipe_width();
        let stride = viewport.recycle_spacing() + width;
        let start = viewport.width as i32;
        std::array::from_fn(|i| {
            Pipe::new(
                start + i as i32 * stride,
                random_gap_top(viewport, rng),
                width,
                viewport.gap_height(),
            )
        })
    }

    /// Put every pipe back at its starting slot with a new gap.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.pipes = Self::initial_pipes(&self.viewport, rng);
    }

    /// Scroll every pipe left by `speed`.
    pub fn advance(&mut self, speed: i32) {
        for pipe in &mut self.pipes {
            pipe.update(speed);
        }
    }

    /// Recycle every pipe whose right edge is past the left boundary.
    ///
    /// Pipes are visited in index order and each recycle reads the farthest
    /// `x` at that moment, so a pipe recycled earlier in the same pass counts
    /// as the farthest for the next one. Returns how many were recycled.
    pub fn recycle_expired<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut recycled = 0;
        for i in 0..PIPE_COUNT {
            if self.pipes[i].right() >= 0 {
                continue;
            }
            let new_x = self.farthest_x() + self.viewport.recycle_spacing();
            let gap_top = random_gap_top(&self.viewport, rng);
            log::trace!(
                "Recycling pipe {} from x={} to x={} (gap top {})",
                i,
                self.pipes[i].x(),
                new_x,
                gap_top
            );
            self.pipes[i].recycle(new_x, gap_top);
            recycled += 1;
        }
        recycled
    }

    /// Largest `x` across the whole pool.
    pub fn farthest_x(&self) -> i32 {
        self.pipes
            .iter()
            .map(Pipe::x)
            .max()
            .unwrap_or(self.viewport.width as i32)
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub(crate) fn pipes_mut(&mut self) -> &mut [Pipe] {
        &mut self.pipes
    }
}

/// Uniform gap top in `[h/6, h/6 + h/2)`.
pub fn random_gap_top<R: Rng>(viewport: &Viewport, rng: &mut R) -> i32 {
    viewport.gap_top_min() + rng.gen_range(0..viewport.gap_top_spread())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn viewport() -> Viewport {
        Viewport::new(400, 800).unwrap()
    }

    #[test]
    fn test_initial_layout_is_staggered_off_screen() {
        let mut rng = create_test_rng();
        let pool = PipePool::new(viewport(), &mut rng);
        let xs: Vec<i32> = pool.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![400, 666, 932]);
        for pipe in pool.pipes() {
            assert_eq!(pipe.width(), 66);
            assert_eq!(pipe.gap_height(), 200);
            assert!(!pipe.passed());
        }
    }

    #[test]
    fn test_gap_tops_stay_in_range() {
        let vp = viewport();
        let mut rng = create_test_rng();
        for _ in 0..1000 {
            let top = random_gap_top(&vp, &mut rng);
            assert!(top >= 133);
            assert!(top < 133 + 400);
        }
    }

    #[test]
    fn test_advance_moves_every_pipe() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        pool.advance(10);
        let xs: Vec<i32> = pool.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![390, 656, 922]);
    }

    #[test]
    fn test_nothing_recycled_while_on_screen() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        // Right edge exactly at 0 is not yet expired
        pool.pipes_mut()[0].recycle(-66, 200);
        assert_eq!(pool.recycle_expired(&mut rng), 0);
        assert_eq!(pool.pipes()[0].x(), -66);
    }

    #[test]
    fn test_expired_pipe_moves_behind_farthest() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        pool.pipes_mut()[0].recycle(-67, 200);
        pool.pipes_mut()[0].mark_passed();
        let farthest_before = pool.farthest_x();
        assert_eq!(farthest_before, 932);

        assert_eq!(pool.recycle_expired(&mut rng), 1);

        let pipe = &pool.pipes()[0];
        assert_eq!(pipe.x(), farthest_before + 200);
        assert!(!pipe.passed());
        assert!(pipe.gap_top() >= 133 && pipe.gap_top() < 533);
    }

    #[test]
    fn test_multiple_expired_read_fresh_farthest() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        pool.pipes_mut()[0].recycle(-100, 200);
        pool.pipes_mut()[1].recycle(-80, 200);
        pool.pipes_mut()[2].recycle(500, 200);

        assert_eq!(pool.recycle_expired(&mut rng), 2);

        // Index 0 lands behind pipe 2, then index 1 lands behind index 0
        assert_eq!(pool.pipes()[0].x(), 700);
        assert_eq!(pool.pipes()[1].x(), 900);
        assert_eq!(pool.pipes()[2].x(), 500);
    }

    #[test]
    fn test_pool_cycles_indefinitely() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        let mut total_recycled = 0;
        for _ in 0..5000 {
            pool.advance(10);
            total_recycled += pool.recycle_expired(&mut rng);
            assert_eq!(pool.pipes().len(), PIPE_COUNT);
            for pipe in pool.pipes() {
                assert!(pipe.right() >= 0);
            }
        }
        assert!(total_recycled > 100);
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut rng = create_test_rng();
        let mut pool = PipePool::new(viewport(), &mut rng);
        for _ in 0..200 {
            pool.advance(10);
            pool.recycle_expired(&mut rng);
        }
        pool.pipes_mut()[1].mark_passed();
        pool.reset(&mut rng);
        let xs: Vec<i32> = pool.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![400, 666, 932]);
        assert!(pool.pipes().iter().all(|p| !p.passed()));
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let mut a = create_test_rng();
        let mut b = create_test_rng();
        let pool_a = PipePool::new(viewport(), &mut a);
        let pool_b = PipePool::new(viewport(), &mut b);
        assert_eq!(pool_a.pipes(), pool_b.pipes());
    }
}
