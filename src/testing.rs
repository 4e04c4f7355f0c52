
macro_rules! assert_approx {
    ($real:expr, $expected:expr, $delta:expr) => {
	if $real < $expected - $delta || $real > $expected + $delta {
	    panic!( "Violate {:.4} == {:.4} (+-{:.4})", $real, $expected, $delta );
	}
    }
}
