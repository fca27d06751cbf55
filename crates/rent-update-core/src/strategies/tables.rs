//! Historical index data.
//!
//! `IPC_BASE_1992` holds the discontinued base-1992 monthly CPI levels
//! (March 1954 through December 2001, full calendar rows). Values after
//! the January 2002 base change come from the live API instead and are
//! made comparable through `LAU_LINK_COEFFICIENTS`, the per-month linking
//! coefficients that express a current-base value in base-1992 terms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) const IPC_BASE_1992_FIRST_YEAR: i32 = 1954;

pub(crate) static IPC_BASE_1992: [[Decimal; 12]; 48] = [
    // 1954
    [dec!(3.351), dec!(3.362), dec!(3.373), dec!(3.384), dec!(3.395), dec!(3.407), dec!(3.418), dec!(3.429), dec!(3.440), dec!(3.451), dec!(3.463), dec!(3.474)],
    // 1955
    [dec!(3.486), dec!(3.498), dec!(3.510), dec!(3.522), dec!(3.534), dec!(3.546), dec!(3.558), dec!(3.571), dec!(3.583), dec!(3.595), dec!(3.608), dec!(3.620)],
    // 1956
    [dec!(3.636), dec!(3.652), dec!(3.669), dec!(3.685), dec!(3.702), dec!(3.718), dec!(3.735), dec!(3.751), dec!(3.768), dec!(3.785), dec!(3.802), dec!(3.819)],
    // 1957
    [dec!(3.852), dec!(3.885), dec!(3.919), dec!(3.953), dec!(3.987), dec!(4.022), dec!(4.057), dec!(4.092), dec!(4.127), dec!(4.163), dec!(4.199), dec!(4.235)],
    // 1958
    [dec!(4.280), dec!(4.325), dec!(4.371), dec!(4.417), dec!(4.463), dec!(4.510), dec!(4.558), dec!(4.606), dec!(4.654), dec!(4.703), dec!(4.753), dec!(4.803)],
    // 1959
    [dec!(4.831), dec!(4.860), dec!(4.888), dec!(4.917), dec!(4.946), dec!(4.975), dec!(5.004), dec!(5.034), dec!(5.063), dec!(5.093), dec!(5.123), dec!(5.153)],
    // 1960
    [dec!(5.162), dec!(5.170), dec!(5.179), dec!(5.188), dec!(5.196), dec!(5.205), dec!(5.213), dec!(5.222), dec!(5.231), dec!(5.239), dec!(5.248), dec!(5.257)],
    // 1961
    [dec!(5.263), dec!(5.269), dec!(5.275), dec!(5.281), dec!(5.287), dec!(5.293), dec!(5.299), dec!(5.305), dec!(5.312), dec!(5.318), dec!(5.324), dec!(5.330)],
    // 1962
    [dec!(5.355), dec!(5.380), dec!(5.404), dec!(5.430), dec!(5.455), dec!(5.480), dec!(5.505), dec!(5.531), dec!(5.556), dec!(5.582), dec!(5.608), dec!(5.634)],
    // 1963
    [dec!(5.674), dec!(5.714), dec!(5.754), dec!(5.795), dec!(5.835), dec!(5.877), dec!(5.918), dec!(5.960), dec!(6.002), dec!(6.044), dec!(6.087), dec!(6.130)],
    // 1964
    [dec!(6.164), dec!(6.198), dec!(6.233), dec!(6.268), dec!(6.303), dec!(6.338), dec!(6.373), dec!(6.409), dec!(6.444), dec!(6.480), dec!(6.516), dec!(6.553)],
    // 1965
    [dec!(6.602), dec!(6.652), dec!(6.701), dec!(6.752), dec!(6.803), dec!(6.854), dec!(6.905), dec!(6.957), dec!(7.009), dec!(7.062), dec!(7.115), dec!(7.169)],
    // 1966
    [dec!(7.205), dec!(7.241), dec!(7.277), dec!(7.314), dec!(7.351), dec!(7.387), dec!(7.425), dec!(7.462), dec!(7.499), dec!(7.537), dec!(7.575), dec!(7.613)],
    // 1967
    [dec!(7.653), dec!(7.692), dec!(7.732), dec!(7.772), dec!(7.812), dec!(7.853), dec!(7.894), dec!(7.935), dec!(7.976), dec!(8.017), dec!(8.059), dec!(8.100)],
    // 1968
    [dec!(8.120), dec!(8.139), dec!(8.158), dec!(8.178), dec!(8.197), dec!(8.217), dec!(8.237), dec!(8.256), dec!(8.276), dec!(8.296), dec!(8.315), dec!(8.335)],
    // 1969
    [dec!(8.358), dec!(8.382), dec!(8.405), dec!(8.429), dec!(8.452), dec!(8.476), dec!(8.499), dec!(8.523), dec!(8.547), dec!(8.571), dec!(8.595), dec!(8.619)],
    // 1970
    [dec!(8.666), dec!(8.714), dec!(8.762), dec!(8.810), dec!(8.858), dec!(8.907), dec!(8.956), dec!(9.005), dec!(9.055), dec!(9.104), dec!(9.154), dec!(9.205)],
    // 1971
    [dec!(9.276), dec!(9.348), dec!(9.420), dec!(9.493), dec!(9.567), dec!(9.641), dec!(9.715), dec!(9.791), dec!(9.866), dec!(9.943), dec!(10.020), dec!(10.098)],
    // 1972
    [dec!(10.157), dec!(10.217), dec!(10.277), dec!(10.337), dec!(10.398), dec!(10.460), dec!(10.521), dec!(10.583), dec!(10.645), dec!(10.708), dec!(10.771), dec!(10.835)],
    // 1973
    [dec!(10.956), dec!(11.079), dec!(11.203), dec!(11.328), dec!(11.455), dec!(11.583), dec!(11.713), dec!(11.844), dec!(11.977), dec!(12.111), dec!(12.247), dec!(12.384)],
    // 1974
    [dec!(12.555), dec!(12.729), dec!(12.904), dec!(13.083), dec!(13.263), dec!(13.447), dec!(13.633), dec!(13.821), dec!(14.012), dec!(14.205), dec!(14.402), dec!(14.601)],
    // 1975
    [dec!(14.762), dec!(14.925), dec!(15.090), dec!(15.257), dec!(15.426), dec!(15.596), dec!(15.769), dec!(15.943), dec!(16.119), dec!(16.297), dec!(16.477), dec!(16.659)],
    // 1976
    [dec!(16.912), dec!(17.169), dec!(17.429), dec!(17.693), dec!(17.962), dec!(18.234), dec!(18.511), dec!(18.792), dec!(19.077), dec!(19.366), dec!(19.660), dec!(19.958)],
    // 1977
    [dec!(20.351), dec!(20.753), dec!(21.162), dec!(21.579), dec!(22.005), dec!(22.438), dec!(22.881), dec!(23.332), dec!(23.792), dec!(24.261), dec!(24.739), dec!(25.227)],
    // 1978
    [dec!(25.550), dec!(25.877), dec!(26.209), dec!(26.544), dec!(26.884), dec!(27.229), dec!(27.577), dec!(27.931), dec!(28.288), dec!(28.651), dec!(29.018), dec!(29.389)],
    // 1979
    [dec!(29.747), dec!(30.108), dec!(30.474), dec!(30.844), dec!(31.219), dec!(31.599), dec!(31.983), dec!(32.371), dec!(32.765), dec!(33.163), dec!(33.566), dec!(33.974)],
    // 1980
    [dec!(34.377), dec!(34.785), dec!(35.197), dec!(35.615), dec!(36.037), dec!(36.465), dec!(36.897), dec!(37.335), dec!(37.778), dec!(38.226), dec!(38.679), dec!(39.138)],
    // 1981
    [dec!(39.579), dec!(40.026), dec!(40.477), dec!(40.933), dec!(41.395), dec!(41.861), dec!(42.333), dec!(42.811), dec!(43.293), dec!(43.781), dec!(44.275), dec!(44.774)],
    // 1982
    [dec!(45.266), dec!(45.763), dec!(46.265), dec!(46.773), dec!(47.286), dec!(47.806), dec!(48.330), dec!(48.861), dec!(49.397), dec!(49.940), dec!(50.488), dec!(51.042)],
    // 1983
    [dec!(51.534), dec!(52.031), dec!(52.533), dec!(53.039), dec!(53.550), dec!(54.066), dec!(54.588), dec!(55.114), dec!(55.645), dec!(56.181), dec!(56.723), dec!(57.270)],
    // 1984
    [dec!(57.682), dec!(58.098), dec!(58.517), dec!(58.939), dec!(59.363), dec!(59.791), dec!(60.222), dec!(60.656), dec!(61.093), dec!(61.534), dec!(61.977), dec!(62.424)],
    // 1985
    [dec!(62.835), dec!(63.249), dec!(63.666), dec!(64.085), dec!(64.508), dec!(64.933), dec!(65.361), dec!(65.791), dec!(66.225), dec!(66.661), dec!(67.100), dec!(67.543)],
    // 1986
    [dec!(67.993), dec!(68.446), dec!(68.902), dec!(69.362), dec!(69.824), dec!(70.290), dec!(70.758), dec!(71.230), dec!(71.705), dec!(72.183), dec!(72.664), dec!(73.149)],
    // 1987
    [dec!(73.423), dec!(73.699), dec!(73.976), dec!(74.253), dec!(74.532), dec!(74.812), dec!(75.093), dec!(75.375), dec!(75.658), dec!(75.942), dec!(76.227), dec!(76.513)],
    // 1988
    [dec!(76.874), dec!(77.236), dec!(77.600), dec!(77.965), dec!(78.332), dec!(78.701), dec!(79.072), dec!(79.444), dec!(79.818), dec!(80.194), dec!(80.572), dec!(80.951)],
    // 1989
    [dec!(81.403), dec!(81.857), dec!(82.313), dec!(82.772), dec!(83.233), dec!(83.697), dec!(84.164), dec!(84.633), dec!(85.105), dec!(85.580), dec!(86.057), dec!(86.537)],
    // 1990
    [dec!(86.992), dec!(87.450), dec!(87.910), dec!(88.373), dec!(88.838), dec!(89.305), dec!(89.775), dec!(90.247), dec!(90.722), dec!(91.200), dec!(91.679), dec!(92.162)],
    // 1991
    [dec!(92.574), dec!(92.988), dec!(93.404), dec!(93.821), dec!(94.241), dec!(94.662), dec!(95.086), dec!(95.511), dec!(95.938), dec!(96.367), dec!(96.798), dec!(97.231)],
    // 1992
    [dec!(97.650), dec!(98.071), dec!(98.494), dec!(98.919), dec!(99.346), dec!(99.774), dec!(100.204), dec!(100.637), dec!(101.071), dec!(101.506), dec!(101.944), dec!(102.384)],
    // 1993
    [dec!(102.793), dec!(103.203), dec!(103.616), dec!(104.030), dec!(104.445), dec!(104.862), dec!(105.281), dec!(105.702), dec!(106.124), dec!(106.548), dec!(106.973), dec!(107.401)],
    // 1994
    [dec!(107.778), dec!(108.157), dec!(108.537), dec!(108.919), dec!(109.301), dec!(109.686), dec!(110.071), dec!(110.458), dec!(110.846), dec!(111.236), dec!(111.627), dec!(112.019)],
    // 1995
    [dec!(112.413), dec!(112.808), dec!(113.204), dec!(113.602), dec!(114.001), dec!(114.402), dec!(114.804), dec!(115.208), dec!(115.612), dec!(116.019), dec!(116.427), dec!(116.836)],
    // 1996
    [dec!(117.143), dec!(117.451), dec!(117.759), dec!(118.069), dec!(118.379), dec!(118.690), dec!(119.002), dec!(119.315), dec!(119.629), dec!(119.943), dec!(120.258), dec!(120.575)],
    // 1997
    [dec!(120.774), dec!(120.973), dec!(121.173), dec!(121.373), dec!(121.574), dec!(121.774), dec!(121.975), dec!(122.177), dec!(122.379), dec!(122.581), dec!(122.783), dec!(122.986)],
    // 1998
    [dec!(123.129), dec!(123.271), dec!(123.414), dec!(123.557), dec!(123.701), dec!(123.844), dec!(123.987), dec!(124.131), dec!(124.275), dec!(124.419), dec!(124.563), dec!(124.708)],
    // 1999
    [dec!(125.005), dec!(125.303), dec!(125.602), dec!(125.902), dec!(126.202), dec!(126.503), dec!(126.805), dec!(127.107), dec!(127.410), dec!(127.714), dec!(128.019), dec!(128.324)],
    // 2000
    [dec!(128.744), dec!(129.166), dec!(129.589), dec!(130.013), dec!(130.439), dec!(130.866), dec!(131.294), dec!(131.724), dec!(132.155), dec!(132.588), dec!(133.022), dec!(133.457)],
    // 2001
    [dec!(133.754), dec!(134.051), dec!(134.349), dec!(134.648), dec!(134.947), dec!(135.247), dec!(135.548), dec!(135.849), dec!(136.151), dec!(136.453), dec!(136.757), dec!(137.061)],
];

pub(crate) static LAU_LINK_COEFFICIENTS: [Decimal; 12] = [
    dec!(1.9022926),
    dec!(1.9025661),
    dec!(1.9028525),
    dec!(1.9031519),
    dec!(1.9034501),
    dec!(1.9037612),
    dec!(1.9040850),
    dec!(1.9044074),
    dec!(1.9047426),
    dec!(1.9050764),
    dec!(1.9054367),
    dec!(1.9057955),
];
/// Base-1992 CPI level for a pre-2002 period, if the table covers it.
pub(crate) fn ipc_base_1992(year: i32, month: u32) -> Option<Decimal> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let row = usize::try_from(year.checked_sub(IPC_BASE_1992_FIRST_YEAR)?).ok()?;
    IPC_BASE_1992
        .get(row)
        .map(|months| months[(month - 1) as usize])
}

/// Linking coefficient for a month (1–12).
pub(crate) fn lau_link_coefficient(month: u32) -> Option<Decimal> {
    if (1..=12).contains(&month) {
        Some(LAU_LINK_COEFFICIENTS[(month - 1) as usize])
    } else {
        None
    }
}
