use boundkit::ds::RingBuffer;

fn main() {
    let mut recent = RingBuffer::new(3).unwrap();

    for event in ["boot", "connect", "auth", "query"] {
        if let Some(dropped) = recent.push(event) {
            println!("displaced: {dropped}");
        }
    }

    println!("window: {recent}");
    println!("oldest: {}", recent.first().unwrap());
}

// Expected output:
// displaced: boot
// window: { connect, auth, query }
// oldest: connect
//
// Explanation: capacity=3; the fourth push overwrites the oldest entry
// ("boot") and the live window holds the three most recent events.
