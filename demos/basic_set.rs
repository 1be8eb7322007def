use boundkit::set::BasicSet;

fn main() {
    let readers: BasicSet<&str> = ["ada", "brook", "casey"].into_iter().collect();
    let writers: BasicSet<&str> = ["brook", "devon"].into_iter().collect();

    let everyone = readers.union(&writers);
    let read_only = readers.difference(&writers);

    println!("total members: {}", everyone.len());
    println!("read-only members: {}", read_only.len());
    println!("brook writes? {}", writers.contains(&"brook"));
}

// Expected output:
// total members: 4
// read-only members: 2
// brook writes? true
