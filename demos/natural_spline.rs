extern crate gauss_jordan_spline;

use gauss_jordan_spline::{Point, Spline};

fn main() {

    let x_min = 0.0;
    let x_max = 6.0;

    let points = vec![
        Point::new(x_min, 1.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(5.0, 1.0),
        Point::new(x_max, 1.0)
    ];

    let spline = match Spline::new(points) {
        Ok(spline) => spline,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };

    eprint!("{}", spline);

    println!("x;y");
    for point in spline.sample(60) {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
