use simplevec::prelude::*;

fn main() {
    let mut v = vector![1, 2, 3];
    let first = &v[0];
    v.push(4);
    println!("{first}");
}
