use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 100;
pub const MAX_DEPTH: f64 = 1000.0;
pub const LINK_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
  pub x: f64,
  pub y: f64,
  pub z: f64,
  pub vx: f64,
  pub vy: f64,
  pub vz: f64,
  pub size: f64,
  pub hue: f64,
  pub opacity: f64
}

impl Particle {
  fn spawn(rng: &mut SmallRng, width: f64, height: f64) -> Self {
    Particle {
      x: rng.random::<f64>() * width,
      y: rng.random::<f64>() * height,
      z: rng.random::<f64>() * MAX_DEPTH,
      vx: (rng.random::<f64>() - 0.5) * 2.0,
      vy: (rng.random::<f64>() - 0.5) * 2.0,
      vz: rng.random::<f64>() * 2.0 + 1.0,
      size: rng.random::<f64>() * 3.0 + 1.0,
      hue: rng.random::<f64>() * 60.0 + 200.0,
      opacity: rng.random::<f64>() * 0.8 + 0.2
    }
  }

  pub fn color(&self) -> String {
    format!("hsl({:.0}, 70%, 60%)", self.hue)
  }

  /// Perspective scale, grows as the particle approaches the viewer.
  pub fn scale(&self) -> f64 {
    MAX_DEPTH / (MAX_DEPTH - self.z)
  }

  pub fn project(&self) -> Projected {
    let scale = self.scale();
    Projected {
      x: self.x * scale,
      y: self.y * scale,
      radius: self.size * scale,
      alpha: self.opacity * (self.z / MAX_DEPTH)
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
  pub x: f64,
  pub y: f64,
  pub radius: f64,
  pub alpha: f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
  pub from: usize,
  pub to: usize,
  pub alpha: f64
}

pub struct ParticleField {
  rng: SmallRng,
  width: f64,
  height: f64,
  particles: Vec<Particle>
}

impl ParticleField {
  pub fn new(width: f64, height: f64, seed: u64) -> Self {
    Self::with_count(width, height, seed, PARTICLE_COUNT)
  }

  pub fn with_count(width: f64, height: f64, seed: u64, count: usize) -> Self {
    let mut rng = SmallRng::seed_from_u64(seed);
    let particles = (0..count).map(|_| Particle::spawn(&mut rng, width, height)).collect();
    Self { rng, width, height, particles }
  }

  pub fn particles(&self) -> &[Particle] {
    &self.particles
  }

  pub fn size(&self) -> (f64, f64) {
    (self.width, self.height)
  }

  pub fn resize(&mut self, width: f64, height: f64) {
    self.width = width;
    self.height = height;
  }

  /// Advances every particle by one frame.
  pub fn step(&mut self) {
    for p in self.particles.iter_mut() {
      p.x += p.vx;
      p.y += p.vy;
      p.z -= p.vz;

      if p.z <= 0.0 {
        p.z = MAX_DEPTH;
        p.x = self.rng.random::<f64>() * self.width;
        p.y = self.rng.random::<f64>() * self.height;
      }

      if p.x < 0.0 || p.x > self.width {
        p.vx *= -1.0;
      }
      if p.y < 0.0 || p.y > self.height {
        p.vy *= -1.0;
      }
    }
  }

  /// Pairs closer than `max_dist` on the x/y plane, fading with distance.
  pub fn links(&self, max_dist: f64) -> Vec<Link> {
    let mut links = vec![];
    for (i, a) in self.particles.iter().enumerate() {
      for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
        let distance = (a.x - b.x).hypot(a.y - b.y);
        if distance < max_dist {
          links.push(Link { from: i, to: j, alpha: 0.1 * (1.0 - distance / max_dist) });
        }
      }
    }
    links
  }
}

/* word cycling for the hero headline */
pub struct WordCycle {
  words: &'static [&'static str],
  index: usize
}

impl WordCycle {
  pub fn new(words: &'static [&'static str]) -> Self {
    Self { words, index: 0 }
  }

  pub fn current(&self) -> &'static str {
    self.words.get(self.index).copied().unwrap_or_default()
  }

  pub fn advance(&mut self) -> &'static str {
    if !self.words.is_empty() {
      self.index = (self.index + 1) % self.words.len();
    }
    self.current()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn spawn_stays_within_bounds() {
    let field = ParticleField::new(800.0, 600.0, 7);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
      assert!((0.0..=800.0).contains(&p.x));
      assert!((0.0..=600.0).contains(&p.y));
      assert!((0.0..MAX_DEPTH).contains(&p.z));
      assert!((1.0..3.0).contains(&p.vz));
      assert!((200.0..260.0).contains(&p.hue));
    }
  }

  #[test]
  fn same_seed_same_field() {
    let mut a = ParticleField::new(640.0, 480.0, 42);
    let mut b = ParticleField::new(640.0, 480.0, 42);
    for _ in 0..50 {
      a.step();
      b.step();
    }
    assert_eq!(a.particles(), b.particles());
  }

  #[test]
  fn particles_bounce_at_edges() {
    let mut field = ParticleField::with_count(100.0, 100.0, 1, 1);
    field.particles[0] = Particle { x: 99.5, y: 50.0, z: 500.0, vx: 1.0, vy: 0.0, vz: 1.0, size: 1.0, hue: 220.0, opacity: 1.0 };
    field.step();
    assert_eq!(field.particles[0].vx, -1.0);
    field.step();
    assert_eq!(field.particles[0].x, 99.5);
  }

  #[test]
  fn particles_recycle_at_the_viewer() {
    let mut field = ParticleField::with_count(100.0, 100.0, 3, 1);
    field.particles[0].z = 0.5;
    field.particles[0].vz = 1.0;
    field.step();
    assert_eq!(field.particles[0].z, MAX_DEPTH);
  }

  #[test]
  fn links_fade_with_distance() {
    let mut field = ParticleField::with_count(500.0, 500.0, 9, 3);
    field.particles[0].x = 0.0;
    field.particles[0].y = 0.0;
    field.particles[1].x = 30.0;
    field.particles[1].y = 40.0;
    field.particles[2].x = 400.0;
    field.particles[2].y = 400.0;

    let links = field.links(LINK_DISTANCE);
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].from, links[0].to), (0, 1));
    assert!((links[0].alpha - 0.05).abs() < 1e-9);
  }

  #[test]
  fn projection_scales_with_depth() {
    let p = Particle { x: 10.0, y: 20.0, z: 500.0, vx: 0.0, vy: 0.0, vz: 1.0, size: 2.0, hue: 200.0, opacity: 0.8 };
    let projected = p.project();
    assert_eq!(projected, Projected { x: 20.0, y: 40.0, radius: 4.0, alpha: 0.4 });
    assert_eq!(p.color(), "hsl(200, 70%, 60%)");
  }

  #[test]
  fn word_cycle_wraps() {
    static WORDS: [&str; 3] = ["future", "impossible", "extraordinary"];
    let mut cycle = WordCycle::new(&WORDS);
    assert_eq!(cycle.current(), "future");
    assert_eq!(cycle.advance(), "impossible");
    cycle.advance();
    assert_eq!(cycle.advance(), "future");
  }
}
