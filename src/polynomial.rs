use std::fmt::Display;

/// Polynomial with coefficients in descending power order, `[a, b, c, d]` stands for
/// `a·x³ + b·x² + c·x + d`.
///
/// Equality is exact element-wise comparison of the coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Empty `coefficients` give the zero polynomial.
    pub fn new(coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            return Polynomial::zero(0);
        }
        Polynomial { coefficients }
    }

    /// Polynomial of given degree with all coefficients equal to 0.
    pub fn zero(degree: usize) -> Self {
        Polynomial { coefficients: vec![0.0; degree + 1] }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |result, c| result * x + c)
    }

    /// First derivative. Derivative of a constant is the zero constant.
    pub fn derivative(&self) -> Polynomial {
        let degree = self.degree();
        if degree == 0 {
            return Polynomial::zero(0);
        }

        let coefficients = self.coefficients[..degree]
            .iter()
            .enumerate()
            .map(|(i, c)| c * (degree - i) as f64)
            .collect();
        Polynomial { coefficients }
    }
}

/// Human readable form, e.g. `0.8 x^3 - 3.4 x + 4`. Coefficients are rounded to 3 decimals,
/// terms that round to 0 are left out and factors that round to 1 are not printed.
impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let degree = self.degree();
        let mut empty = true;

        for (i, c) in self.coefficients.iter().enumerate() {
            let magnitude = format_coefficient(c.abs());
            if magnitude == "0" {
                continue;
            }

            let power = degree - i;
            if empty {
                if *c < 0.0 {
                    write!(f, "-")?;
                }
            } else if *c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            if magnitude != "1" || power == 0 {
                write!(f, "{}", magnitude)?;
                if power > 0 {
                    write!(f, " ")?;
                }
            }

            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            empty = false;
        }

        if empty {
            write!(f, "0")?;
        }
        Ok(())
    }
}

fn format_coefficient(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}
