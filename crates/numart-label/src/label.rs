use numart_core::{BinaryMask, Coord, Grid, LabelGrid};

const DR: [isize; 8] = [-1, -1, -1, 0, 0, 1, 1, 1];
const DC: [isize; 8] = [-1, 0, 1, -1, 1, -1, 0, 1];

/// Result of one labeling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    /// `0` for background, `1..=count` for components.
    pub labels: LabelGrid,
    pub count: usize,
}

impl Labeling {
    /// Cell count per component; entry `k - 1` belongs to label `k`.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count];
        for &l in self.labels.data() {
            if l != 0 {
                sizes[l as usize - 1] += 1;
            }
        }
        sizes
    }

    /// Coordinates per component in row-major scan order; entry `k - 1`
    /// belongs to label `k`.
    pub fn coords_by_label(&self) -> Vec<Vec<Coord>> {
        let sizes = self.component_sizes();
        let mut out: Vec<Vec<Coord>> = sizes.into_iter().map(Vec::with_capacity).collect();
        for (c, &l) in self.labels.iter() {
            if l != 0 {
                out[l as usize - 1].push(c);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// 8-connected labeler with a reusable flood-fill stack.
#[derive(Debug, Clone, Default)]
pub struct ComponentLabeler {
    stack: Vec<usize>,
}

impl ComponentLabeler {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Labels the true cells of `mask`.
    ///
    /// Seeds are taken in row-major order and each new seed receives the next
    /// id, so ids are stable for a given mask.
    pub fn label(&mut self, mask: &BinaryMask) -> Labeling {
        let (rows, cols) = mask.shape();
        let cells = mask.data();
        let mut labels = Grid::new_fill(rows, cols, 0u32);
        let mut next = 0u32;

        for seed in 0..cells.len() {
            if !cells[seed] || labels.data()[seed] != 0 {
                continue;
            }

            next += 1;
            let out = labels.data_mut();
            out[seed] = next;
            self.stack.clear();
            self.stack.push(seed);

            while let Some(p) = self.stack.pop() {
                let (r, c) = ((p / cols) as isize, (p % cols) as isize);
                for (dr, dc) in DR.iter().zip(DC.iter()) {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }

                    let nb = nr as usize * cols + nc as usize;
                    if cells[nb] && out[nb] == 0 {
                        out[nb] = next;
                        self.stack.push(nb);
                    }
                }
            }
        }

        Labeling {
            labels,
            count: next as usize,
        }
    }
}

pub fn label8(mask: &BinaryMask) -> Labeling {
    ComponentLabeler::new().label(mask)
}
