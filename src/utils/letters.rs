use once_cell::sync::Lazy;
use rand::Rng;

/// Letter frequency distribution for English (approximate).
/// Used to pick filler letters so the background looks like text.
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('E', 12.70),
        ('T', 9.05),
        ('A', 8.16),
        ('O', 7.50),
        ('I', 6.96),
        ('N', 6.74),
        ('S', 6.32),
        ('H', 6.09),
        ('R', 5.98),
        ('D', 4.25),
        ('L', 4.02),
        ('C', 2.78),
        ('U', 2.75),
        ('M', 2.40),
        ('W', 2.36),
        ('F', 2.22),
        ('G', 2.01),
        ('Y', 1.97),
        ('P', 1.92),
        ('B', 1.49),
        ('V', 0.97),
        ('K', 0.77),
        ('J', 0.15),
        ('X', 0.15),
        ('Q', 0.09),
        ('Z', 0.07),
    ]
});

static CUMULATIVE_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(get_cumulative_distribution);

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}

/// Pick one uppercase letter, weighted by English frequency
pub fn random_letter(rng: &mut impl Rng) -> char {
    let total = CUMULATIVE_DISTRIBUTION.last().map_or(0.0, |(_, c)| *c);
    let random_value = rng.random::<f32>() * total;

    for (letter, cumulative) in CUMULATIVE_DISTRIBUTION.iter() {
        if random_value <= *cumulative {
            return *letter;
        }
    }

    'E' // Fallback
}
