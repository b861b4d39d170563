use std::fmt::Display;

use crate::{
    error::{Error, InvalidInput},
    matrix::Matrix,
    point::Point,
    polynomial::Polynomial,
    solver::GaussJordan,
};

/// One cubic piece of a [Spline], valid on `[start.x, end.x]` and expressed in the local
/// variable `t = x - start.x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    polynomial: Polynomial,
}

impl Segment {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn contains(&self, x: f64) -> bool {
        self.start.x <= x && x <= self.end.x
    }

    /// Value at `x`. Knots are returned exactly, so the right end of the segment yields
    /// `end.y` rather than the polynomial value at `t = end.x - start.x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x == self.end.x {
            self.end.y
        } else {
            self.polynomial.evaluate(x - self.start.x)
        }
    }

    fn evaluate_derivative(&self, x: f64, order: usize) -> f64 {
        let mut derivative = self.polynomial.clone();
        for _ in 0..order {
            derivative = derivative.derivative();
        }
        derivative.evaluate(x - self.start.x)
    }
}

/// Natural cubic spline through an ordered set of control points.
///
/// Every segment `i` is the cubic `a·t³ + b·t² + c·t + d` with `t = x - x_i`. The `b`
/// coefficients (half of the second derivative) at the interior knots come from the
/// continuity system solved with [GaussJordan], the outer ones are 0.
///
/// The spline is immutable. Editing the control points always rebuilds every segment,
/// see [Spline::with_point_inserted], [Spline::with_point_moved] and
/// [Spline::with_point_removed].
#[derive(Debug, Clone)]
pub struct Spline {
    points: Vec<Point>,
    segments: Vec<Segment>,
    system: Matrix,
    solver: GaussJordan,
}

impl Spline {
    /// Builds spline through `points` using [GaussJordan] with default pivoting.
    /// # Example
    /// ```
    /// use gauss_jordan_spline::{Point, Spline};
    ///
    /// let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
    /// let spline = Spline::new(points).unwrap();
    ///
    /// assert_eq!(1.0, spline.evaluate(1.0).unwrap());
    /// assert_eq!(2, spline.segments().len());
    /// ```
    /// # Errors
    /// [Error::InvalidInput] when there are fewer than 2 points, a coordinate is not finite,
    /// x values are not strictly increasing or the points are so far apart that knot
    /// spacings or segment coefficients overflow. Points are never reordered.
    /// ```
    /// use gauss_jordan_spline::{Point, Spline};
    ///
    /// let points = vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
    /// assert!(Spline::new(points).is_err());
    /// ```
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        Spline::with_solver(points, &GaussJordan::default())
    }

    pub fn with_solver(points: Vec<Point>, solver: &GaussJordan) -> Result<Self, Error> {
        check_points(&points)?;

        let mut system = natural_system(&points);
        log::debug!("natural spline system for {} points:\n{}", points.len(), system);

        if system.rows() > 0 {
            solver.solve(&mut system)?;
        }

        let segments = calculate_segments(&points, &system.solution())?;
        Ok(Spline { points, segments, system, solver: *solver })
    }

    /// Value of the spline at `x`.
    /// # Errors
    /// [Error::OutOfRange] when `x` lies outside `[min_x, max_x]`.
    pub fn evaluate(&self, x: f64) -> Result<f64, Error> {
        self.check_range(x)?;
        let index = self.find_segment_index(x);
        Ok(self.segments[index].evaluate(x))
    }

    /// Value of the derivative of given `order` at `x`. Order 0 is the value itself except
    /// that knots are not special cased.
    pub fn evaluate_derivative(&self, x: f64, order: usize) -> Result<f64, Error> {
        self.check_range(x)?;
        let index = self.find_segment_index(x);
        Ok(self.segments[index].evaluate_derivative(x, order))
    }

    /// Evaluates all `x_vector` values, using the previous segment as a search hint. Either
    /// every value is in range or an error is returned.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Result<Vec<f64>, Error> {
        if let Some(x) = x_vector.iter().find(|x| !self.is_in_range(**x)) {
            return Err(self.out_of_range(*x));
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.find_segment_index_with_hint(index, *x);
            results.push(self.segments[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Like [Spline::evaluate] but values left of the first knot use the first segment and
    /// values right of the last knot use the last segment polynomial.
    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => self.segments[self.find_segment_index(x)].evaluate(x),
        }
    }

    /// `number_of_steps + 1` evenly spaced points of the curve from first to last knot.
    pub fn sample(&self, number_of_steps: usize) -> Vec<Point> {
        let first = self.points[0];
        if number_of_steps == 0 {
            return vec![first];
        }

        let step = (self.max_x() - self.min_x()) / number_of_steps as f64;
        let mut samples = Vec::with_capacity(number_of_steps + 1);
        let mut index = 0;

        for i in 0..number_of_steps {
            let x = first.x + step * i as f64;
            index = self.find_segment_index_with_hint(index, x);
            samples.push(Point::new(x, self.segments[index].evaluate(x)));
        }
        samples.push(self.points[self.points.len() - 1]);
        samples
    }

    /// Rebuilds the spline with an additional point inserted at its x position. Edits keep
    /// the solver the spline was built with.
    pub fn with_point_inserted(&self, point: Point) -> Result<Spline, Error> {
        let mut points = self.points.clone();
        let index = points.partition_point(|p| p.x < point.x);
        points.insert(index, point);
        Spline::with_solver(points, &self.solver)
    }

    /// Rebuilds the spline with the point at `index` replaced. The new point must keep
    /// x values strictly increasing.
    pub fn with_point_moved(&self, index: usize, point: Point) -> Result<Spline, Error> {
        let mut points = self.points.clone();
        *points
            .get_mut(index)
            .ok_or(InvalidInput::IndexOutOfBounds { index, len: self.points.len() })? = point;
        Spline::with_solver(points, &self.solver)
    }

    pub fn with_point_removed(&self, index: usize) -> Result<Spline, Error> {
        if index >= self.points.len() {
            return Err(InvalidInput::IndexOutOfBounds { index, len: self.points.len() }.into());
        }
        let mut points = self.points.clone();
        points.remove(index);
        Spline::with_solver(points, &self.solver)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Solved continuity system, `(N - 2) × (N - 1)` for `N` points. The last column holds
    /// the `b` coefficients of the interior knots.
    pub fn solved_system(&self) -> &Matrix {
        &self.system
    }

    pub fn min_x(&self) -> f64 {
        self.points[0].x
    }

    pub fn max_x(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x() <= x && x <= self.max_x()
    }

    fn check_range(&self, x: f64) -> Result<(), Error> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            Err(self.out_of_range(x))
        }
    }

    fn out_of_range(&self, x: f64) -> Error {
        Error::OutOfRange { x, min: self.min_x(), max: self.max_x() }
    }

    fn find_segment_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.points.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.points[mid].x {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        let next = index_hint + 1;
        let owns = |index: usize| {
            self.segments[index].contains(x)
                && (index + 1 == self.segments.len() || x < self.segments[index].end.x)
        };

        if owns(index_hint) {
            index_hint
        } else if next < self.segments.len() && owns(next) {
            next
        } else {
            self.find_segment_index(x)
        }
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let last = self.segments.len() - 1;
        if x < self.min_x() {
            Some(self.segments[0].polynomial.evaluate(x - self.min_x()))
        } else if x > self.max_x() {
            Some(self.segments[last].polynomial.evaluate(x - self.segments[last].start.x))
        } else {
            None
        }
    }
}

/// One segment per line, e.g. `[0, 1]: -0.5 x^3 + 1.5 x`.
impl Display for Spline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            writeln!(f, "[{}, {}]: {}", segment.start.x, segment.end.x, segment.polynomial)?;
        }
        Ok(())
    }
}

fn check_points(points: &[Point]) -> Result<(), InvalidInput> {
    if points.len() < 2 {
        return Err(InvalidInput::InsufficientPoints { got: points.len() });
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InvalidInput::NonFinite { index });
    }

    if let Some(i) = points.windows(2).position(|w| w[1].x <= w[0].x) {
        return Err(InvalidInput::NonIncreasingX {
            index: i + 1,
            previous: points[i].x,
            current: points[i + 1].x,
        });
    }

    // h[i] and the diagonal 2·(h[i-1] + h[i]) of the continuity system must stay finite
    if let Some(i) = points.windows(2).position(|w| !(w[1].x - w[0].x).is_finite()) {
        return Err(InvalidInput::NonFiniteSpacing { index: i + 1 });
    }
    match points.windows(3).position(|w| !(2.0 * (w[2].x - w[0].x)).is_finite()) {
        Some(i) => Err(InvalidInput::NonFiniteSpacing { index: i + 2 }),
        None => Ok(()),
    }
}

/// Augmented system for the `b` coefficients of the interior knots of a natural spline.
///
/// Row `i - 1` belongs to interior knot `i` and reads
/// `h[i-1]·b[i-1] + 2·(h[i-1] + h[i])·b[i] + h[i]·b[i+1] = 3·(s[i] - s[i-1])`
/// with `h[i] = x[i+1] - x[i]` and slope `s[i] = (y[i+1] - y[i]) / h[i]`. The terms with
/// `b[0]` and `b[N-1]` are dropped since both are 0. Two points give a `0 × 1` matrix.
///
/// ```
/// use gauss_jordan_spline::{natural_system, Point};
///
/// let points = [(0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (4.0, 2.0)].map(Point::from);
/// let system = natural_system(&points);
///
/// assert_eq!(vec![6.0, 2.0, -4.5], system.row(0));
/// assert_eq!(vec![2.0, 6.0, 7.5], system.row(1));
/// ```
pub fn natural_system(points: &[Point]) -> Matrix {
    let n = points.len();
    let rows = n.saturating_sub(2);
    let columns = rows + 1;
    let mut matrix = Matrix::zeros(rows, columns);

    for i in 1..n.saturating_sub(1) {
        let row = i - 1;
        let (previous, current, next) = (points[i - 1], points[i], points[i + 1]);

        if i > 1 {
            matrix[(row, i - 2)] = current.x - previous.x;
        }
        matrix[(row, i - 1)] = 2.0 * (next.x - previous.x);
        if i < n - 2 {
            matrix[(row, i)] = next.x - current.x;
        }

        matrix[(row, columns - 1)] = 3.0
            * ((next.y - current.y) / (next.x - current.x)
                - (current.y - previous.y) / (current.x - previous.x));
    }
    matrix
}

fn calculate_segments(points: &[Point], interior_b: &[f64]) -> Result<Vec<Segment>, InvalidInput> {
    let number_of_segments = points.len() - 1;

    let mut b = Vec::with_capacity(points.len());
    b.push(0.0);
    b.extend_from_slice(interior_b);
    b.push(0.0);

    (0..number_of_segments)
        .map(|i| {
            let (start, end) = (points[i], points[i + 1]);
            let h = end.x - start.x;

            let a = (b[i + 1] - b[i]) / (3.0 * h);
            let c = (end.y - start.y) / h - (b[i + 1] - b[i]) * h / 3.0 - b[i] * h;
            let d = start.y;

            let coefficients = vec![a, b[i], c, d];
            if coefficients.iter().any(|value| !value.is_finite()) {
                return Err(InvalidInput::NonFiniteCoefficients { segment: i });
            }
            Ok(Segment { start, end, polynomial: Polynomial::new(coefficients) })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::solver::PivotStrategy;

    fn points(xy: &[(f64, f64)]) -> Vec<Point> {
        xy.iter().map(|p| Point::from(*p)).collect()
    }

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
        let mut x = rng.gen_range(-5.0..5.0);
        (0..n)
            .map(|_| {
                x += rng.gen_range(0.1..3.0);
                Point::new(x, rng.gen_range(-10.0..10.0))
            })
            .collect()
    }

    #[test]
    fn three_points() {
        // b1 = 3·(-1 - 1) / (2·2) = -1.5
        let eps = 1e-12;
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();

        let first = spline.segments()[0].polynomial();
        assert_approx_eq!(-0.5, first.coefficients()[0], eps);
        assert_eq!(0.0, first.coefficients()[1]);
        assert_approx_eq!(1.5, first.coefficients()[2], eps);
        assert_eq!(0.0, first.coefficients()[3]);

        let second = spline.segments()[1].polynomial();
        assert_approx_eq!(0.5, second.coefficients()[0], eps);
        assert_approx_eq!(-1.5, second.coefficients()[1], eps);
        assert_approx_eq!(0.0, second.coefficients()[2], eps);
        assert_eq!(1.0, second.coefficients()[3]);

        assert_approx_eq!(0.6875, spline.evaluate(0.5).unwrap(), eps);
        assert_approx_eq!(0.6875, spline.evaluate(1.5).unwrap(), eps);
    }

    #[test]
    fn two_points_is_linear() {
        let spline = Spline::new(points(&[(1.0, 2.0), (3.0, 8.0)])).unwrap();

        assert_eq!(0, spline.solved_system().rows());
        assert_eq!(1, spline.solved_system().columns());
        assert_eq!(1, spline.segments().len());

        let coefficients = spline.segments()[0].polynomial().coefficients();
        assert_eq!(&[0.0, 0.0, 3.0, 2.0], coefficients);

        assert_eq!(2.0, spline.evaluate(1.0).unwrap());
        assert_eq!(5.0, spline.evaluate(2.0).unwrap());
        assert_eq!(8.0, spline.evaluate(3.0).unwrap());
    }

    #[test]
    fn natural_system_shape() {
        let system = natural_system(&points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 0.0), (4.0, 1.0), (5.0, 3.0)]));

        assert_eq!(3, system.rows());
        assert_eq!(4, system.columns());
        assert_eq!(vec![4.0, 1.0, 0.0, -9.0], system.row(0));
        assert_eq!(vec![1.0, 6.0, 2.0, 7.5], system.row(1));
        assert_eq!(vec![0.0, 2.0, 6.0, 4.5], system.row(2));

        assert_eq!(0, natural_system(&points(&[(0.0, 1.0), (1.0, 2.0)])).rows());
    }

    #[test]
    fn knots_are_interpolated_exactly() {
        let mut rng = StdRng::seed_from_u64(11);

        for n in 2..20 {
            let points = random_points(&mut rng, n);
            let spline = Spline::new(points.clone()).unwrap();

            for point in &points {
                assert_eq!(point.y, spline.evaluate(point.x).unwrap());
            }

            let x_vector: Vec<f64> = points.iter().map(|p| p.x).collect();
            let y_vector: Vec<f64> = points.iter().map(|p| p.y).collect();
            assert_eq!(y_vector, spline.batch_evaluate(&x_vector).unwrap());
        }
    }

    #[test]
    fn natural_boundary() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(5);

        for n in 2..15 {
            let spline = Spline::new(random_points(&mut rng, n)).unwrap();

            assert_eq!(0.0, spline.segments()[0].polynomial().coefficients()[1]);
            assert_eq!(0.0, spline.evaluate_derivative(spline.min_x(), 2).unwrap());
            assert_approx_eq!(0.0, spline.evaluate_derivative(spline.max_x(), 2).unwrap(), eps);
        }
    }

    #[test]
    fn continuity_at_interior_knots() {
        let eps = 1e-8;
        let mut rng = StdRng::seed_from_u64(17);
        let spline = Spline::new(random_points(&mut rng, 12)).unwrap();

        for pair in spline.segments().windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            let knot = right.start();
            let h = knot.x - left.start().x;

            let value = left.polynomial().evaluate(h);
            let slope = left.polynomial().derivative().evaluate(h);
            let curvature = left.polynomial().derivative().derivative().evaluate(h);

            assert_approx_eq!(knot.y, value, eps);
            assert_approx_eq!(right.polynomial().derivative().evaluate(0.0), slope, eps);
            assert_approx_eq!(
                right.polynomial().derivative().derivative().evaluate(0.0),
                curvature,
                eps
            );
        }
    }

    #[test]
    fn solved_system_holds_interior_b() {
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (4.0, 2.0)])).unwrap();
        let solution = spline.solved_system().solution();

        assert_eq!(2, solution.len());
        assert_eq!(solution[0], spline.segments()[1].polynomial().coefficients()[1]);
        assert_eq!(solution[1], spline.segments()[2].polynomial().coefficients()[1]);
    }

    #[test]
    fn largest_magnitude_pivoting_gives_same_spline() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(23);
        let points = random_points(&mut rng, 10);

        let first = Spline::new(points.clone()).unwrap();
        let largest =
            Spline::with_solver(points, &GaussJordan::new(PivotStrategy::LargestMagnitude)).unwrap();

        for (a, b) in first.segments().iter().zip(largest.segments()) {
            for (ca, cb) in a.polynomial().coefficients().iter().zip(b.polynomial().coefficients()) {
                assert_approx_eq!(*ca, *cb, eps);
            }
        }
    }

    #[test]
    fn reproduces_straight_line() {
        let eps = 1e-10;
        let spline = Spline::new(points(&[(0.0, 1.0), (0.5, 2.0), (2.0, 5.0), (3.0, 7.0)])).unwrap();

        for segment in spline.segments() {
            let coefficients = segment.polynomial().coefficients();
            assert_approx_eq!(0.0, coefficients[0], eps);
            assert_approx_eq!(0.0, coefficients[1], eps);
            assert_approx_eq!(2.0, coefficients[2], eps);
        }
        assert_approx_eq!(3.5, spline.evaluate(1.25).unwrap(), eps);
    }

    #[test]
    fn out_of_range() {
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();

        assert_eq!(
            Err(Error::OutOfRange { x: 2.5, min: 0.0, max: 2.0 }),
            spline.evaluate(2.5)
        );
        assert!(spline.evaluate(-0.1).is_err());
        assert!(spline.evaluate(f64::NAN).is_err());
        assert!(spline.evaluate_derivative(3.0, 1).is_err());
        assert!(spline.batch_evaluate(&[0.0, 0.5, 3.0]).is_err());
    }

    #[test]
    fn extrapolate() {
        let eps = 1e-12;
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();

        // first segment: -0.5 t^3 + 1.5 t
        assert_approx_eq!(-1.0, spline.extrapolate(-1.0), eps);
        // last segment: 0.5 t^3 - 1.5 t^2 + 1, t = x - 1
        assert_approx_eq!(-1.0, spline.extrapolate(3.0), eps);
        assert_approx_eq!(spline.evaluate(0.5).unwrap(), spline.extrapolate(0.5), eps);
        assert_eq!(0.0, spline.extrapolate(2.0));
    }

    #[test]
    fn batch_evaluate_matches_evaluate() {
        let mut rng = StdRng::seed_from_u64(29);
        let spline = Spline::new(random_points(&mut rng, 8)).unwrap();

        let mut x_vector: Vec<f64> = (0..200)
            .map(|_| rng.gen_range(spline.min_x()..=spline.max_x()))
            .collect();
        x_vector.sort_by(f64::total_cmp);
        x_vector.push(spline.min_x());

        let expected: Vec<f64> = x_vector.iter().map(|x| spline.evaluate(*x).unwrap()).collect();
        assert_eq!(expected, spline.batch_evaluate(&x_vector).unwrap());
    }

    #[test]
    fn sample() {
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();
        let samples = spline.sample(4);

        assert_eq!(5, samples.len());
        assert_eq!(Point::new(0.0, 0.0), samples[0]);
        assert_eq!(Point::new(1.0, 1.0), samples[2]);
        assert_eq!(Point::new(2.0, 0.0), samples[4]);
        assert_eq!(0.5, samples[1].x);
        assert_approx_eq!(0.6875, samples[1].y, 1e-12);

        assert_eq!(vec![Point::new(0.0, 0.0)], spline.sample(0));
    }

    #[test]
    fn insufficient_points() {
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::InsufficientPoints { got: 1 })),
            Spline::new(points(&[(0.0, 2.0)])).map(|_| ())
        );
        assert!(Spline::new(Vec::new()).is_err());
    }

    #[test]
    fn duplicate_x() {
        let result = Spline::new(points(&[(0.0, 2.0), (0.0, 1.0), (1.0, 4.0)]));

        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::NonIncreasingX { index: 1, previous: 0.0, current: 0.0 })),
            result.map(|_| ())
        );
    }

    #[test]
    fn unsorted_points_are_rejected() {
        let result = Spline::new(points(&[(0.0, 2.0), (2.0, 1.0), (1.0, 4.0)]));

        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::NonIncreasingX { index: 2, previous: 2.0, current: 1.0 })),
            result.map(|_| ())
        );
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let result = Spline::new(points(&[(0.0, 2.0), (1.0, f64::NAN), (2.0, 4.0)]));

        assert_eq!(Err(Error::InvalidInput(InvalidInput::NonFinite { index: 1 })), result.map(|_| ()));
    }

    #[test]
    fn overflowing_spacing_is_rejected() {
        let result = Spline::new(points(&[(-1e308, 0.0), (1e308, 1.0)]));
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::NonFiniteSpacing { index: 1 })),
            result.map(|_| ())
        );

        // each spacing is finite, the diagonal 2·(x[2] - x[0]) is not
        let result = Spline::new(points(&[(-8e307, 0.0), (0.0, 1.0), (8e307, 0.0)]));
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::NonFiniteSpacing { index: 2 })),
            result.map(|_| ())
        );
    }

    #[test]
    fn overflowing_coefficients_are_rejected() {
        let result = Spline::new(points(&[(0.0, -1e308), (1.0, 1e308)]));
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::NonFiniteCoefficients { segment: 0 })),
            result.map(|_| ())
        );

        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();
        assert!(spline.with_point_moved(1, Point::new(1.0, 1.7e308)).is_err());
    }

    #[test]
    fn edits_rebuild_spline() {
        let spline = Spline::new(points(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0)])).unwrap();

        let inserted = spline.with_point_inserted(Point::new(3.0, 2.0)).unwrap();
        assert_eq!(&points(&[(0.0, 0.0), (2.0, 1.0), (3.0, 2.0), (4.0, 0.0)])[..], inserted.points());
        assert_eq!(2.0, inserted.evaluate(3.0).unwrap());
        assert_eq!(
            inserted.segments()[1..],
            Spline::new(inserted.points().to_vec()).unwrap().segments()[1..]
        );

        let moved = inserted.with_point_moved(1, Point::new(1.0, -1.0)).unwrap();
        assert_eq!(-1.0, moved.evaluate(1.0).unwrap());
        assert!(moved.evaluate(2.0).is_ok());
        assert_ne!(inserted.segments()[0], moved.segments()[0]);

        let removed = moved.with_point_removed(2).unwrap();
        assert_eq!(&points(&[(0.0, 0.0), (1.0, -1.0), (4.0, 0.0)])[..], removed.points());

        let line = removed.with_point_removed(1).unwrap().with_point_removed(0);
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::InsufficientPoints { got: 1 })),
            line.map(|_| ())
        );
    }

    #[test]
    fn invalid_edits() {
        let spline = Spline::new(points(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0)])).unwrap();

        assert!(spline.with_point_inserted(Point::new(2.0, 5.0)).is_err());
        assert!(spline.with_point_moved(1, Point::new(5.0, 0.0)).is_err());
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::IndexOutOfBounds { index: 3, len: 3 })),
            spline.with_point_moved(3, Point::new(5.0, 0.0)).map(|_| ())
        );
        assert_eq!(
            Err(Error::InvalidInput(InvalidInput::IndexOutOfBounds { index: 7, len: 3 })),
            spline.with_point_removed(7).map(|_| ())
        );
    }

    #[test]
    fn display() {
        let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();

        assert_eq!("[0, 1]: -0.5 x^3 + 1.5 x\n[1, 2]: 0.5 x^3 - 1.5 x^2 + 1\n", spline.to_string());
    }

    #[test]
    fn example() {
        let x_min = 0.0;
        let x_max = 6.0;

        let knots = points(&[
            (x_min, 1.0),
            (1.0, -1.0),
            (2.0, 0.0),
            (3.0, -1.0),
            (4.0, 3.0),
            (5.0, 0.5),
            (x_max, 1.0),
        ]);
        let spline = Spline::new(knots.clone()).unwrap();

        let samples = spline.sample(60);
        for point in &samples {
            println!("{:.2};{:.2}", point.x, point.y);
        }

        assert_eq!(61, samples.len());
        assert_eq!(knots[0], samples[0]);
        assert_eq!(knots[6], samples[60]);
        assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
        for knot in &knots {
            assert_eq!(knot.y, spline.evaluate(knot.x).unwrap());
        }
    }

    #[ignore]
    #[test]
    fn performance() {
        use std::time::Instant;

        let mut rng = StdRng::seed_from_u64(1);
        let points = random_points(&mut rng, 200);

        let now = Instant::now();
        let spline = Spline::new(points).unwrap();
        println!("build time: {:.2?}", now.elapsed());

        let x_vector: Vec<f64> = spline.sample(10_000).iter().map(|p| p.x).collect();

        let now = Instant::now();
        for x in x_vector.iter() {
            assert!(spline.evaluate(*x).is_ok());
        }
        println!("evaluate time: {:.2?}", now.elapsed());

        let now = Instant::now();
        let result = spline.batch_evaluate(&x_vector).unwrap();
        assert!(result.len() == x_vector.len());
        println!("batch_evaluate time: {:.2?}", now.elapsed());
    }
}
