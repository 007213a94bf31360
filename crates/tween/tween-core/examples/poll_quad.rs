use tween_core::{Curve, Tween};

/// Poll an integer tween from 0 to 100 over five seconds until it finishes.
fn main() -> anyhow::Result<()> {
    let tween = Tween::new(0, 100, 5.0, Curve::EaseInOutQuad);

    while !tween.is_finished() {
        println!("{}", tween.value());
        std::thread::sleep(std::time::Duration::from_millis(50));
    }

    println!("end value: {}", tween.value());
    Ok(())
}
