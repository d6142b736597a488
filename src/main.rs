use morphfield::Sketch;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(image1), Some(image2)) = (args.next(), args.next()) else {
        eprintln!("usage: morphfield <image1> <image2>");
        std::process::exit(2);
    };

    if let Err(e) = Sketch::new(image1, image2).run() {
        eprintln!("morphfield: {}", e);
        std::process::exit(1);
    }
}
