use dotenvy::dotenv;

const FORWARDED_VARS: [&str; 2] = ["SUPABASE_URL", "SUPABASE_ANON_KEY"];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // a missing .env is fine, the site then renders with persistence disabled
  if dotenv().is_err() {
    println!("cargo::warning=no .env file found, contact forms will not be able to submit");
  }

  for var in FORWARDED_VARS {
    println!("cargo::rerun-if-env-changed={}", var);
    if let Ok(value) = std::env::var(var) {
      println!("cargo::rustc-env={}={}", var, value);
    } else {
      println!("cargo::warning={} is not set at compile time", var);
    }
  }
}
