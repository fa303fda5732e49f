//! Parse a `.env` document, look values up, and print it formatted.

fn main() {
    let input = "\
# database
DB_HOST = localhost   # local only
DB_PASS='s3cr#t'

GREETING=\"multi
line\"
";

    let parsed = envfile_rs::parse_str(input).expect("valid document");
    for name in ["DB_HOST", "DB_PASS", "GREETING", "MISSING"] {
        println!("{name} => {:?}", parsed.value(name));
    }

    println!();
    print!("{}", envfile_rs::format(parsed.document()));
}
