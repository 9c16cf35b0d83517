//! 测试用 TeraChem 输出片段

pub fn lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

pub const ETHANE_XYZ: &str = r#"6
ethane coordinates
C      0.66409651     0.00395265     0.07100793
C     -0.66409647    -0.00395253    -0.07100790
H      1.24675866     0.88983869    -0.16137840
H      1.19483972    -0.87530680     0.42244414
H     -1.19483975     0.87530673    -0.42244421
H     -1.24675868    -0.88983873     0.16137844
"#;

pub const FORMALDEHYDE_XYZ: &str = r#"4
formaldehyde
C     -4.23756410e-03   4.24348000e-05  -5.28516700e-04
O      1.19165823e+00  -1.75471911e-02   1.58030931e-01
H     -5.96146428e-01   9.38505681e-01   4.33255558e-02
H     -5.91274235e-01  -9.21000915e-01  -2.00827970e-01
"#;

pub const FORMALDEHYDE_OPTIM_XYZ: &str = r#"4
   -114.4987725612 frame    0 xyz file generated by terachem
C     -0.01000000     0.00000000     0.00000000
O      1.21000000    -0.01700000     0.15800000
H     -0.59000000     0.94000000     0.04300000
H     -0.59000000    -0.92000000    -0.20000000
4
   -114.5008455547 frame    1 xyz file generated by terachem
C     -0.01222410     0.00018041    -0.00162116
O      1.20164820    -0.01773417     0.15936241
H     -0.59716440     0.93272817     0.04244010
H     -0.59225970    -0.91517440    -0.20018135
"#;

pub const ETHANE_GEOMETRY: &str = r#"Type         X              Y              Z            Mass
C       0.6640965100   0.0039526500   0.0710079300  12.0000000000
C      -0.6640964700  -0.0039525300  -0.0710079000  12.0000000000
H       1.2467586600   0.8898386900  -0.1613784000   1.0078250400
H       1.1948397200  -0.8753068000   0.4224441400   1.0078250400
H      -1.1948397500   0.8753067300  -0.4224442100   1.0078250400
H      -1.2467586800  -0.8898387300   0.1613784400   1.0078250400
"#;

pub const ETHANE_MINIMIZE_OUT: &str = r#"
       *********************************************************
       *                  TeraChem v1.9-2021.12                *
       *           Chemistry at the Speed of Graphics!         *
       *********************************************************

Job started   Mon Mar  4 10:11:12 2019
XYZ coordinates ethane_coords.xyz
Total atoms:        6
Spin multiplicity: 1
Total charge: 0

****** QM coordinates ******
C         0.6640965100          0.0039526500          0.0710079300
C        -0.6640964700         -0.0039525300         -0.0710079000
H         1.2467586600          0.8898386900         -0.1613784000
H         1.1948397200         -0.8753068000          0.4224441400
H        -1.1948397500          0.8753067300         -0.4224442100
H        -1.2467586800         -0.8898387300          0.1613784400

-=#=-      Optimization Cycle     1   -=#=-
FINAL ENERGY: -78.5911374825 a.u.
-=#=-      Optimization Cycle     2   -=#=-
FINAL ENERGY: -78.5932722500 a.u.
Converged! =D
Job finished: Mon Mar  4 10:12:40 2019
"#;

pub const FORMALDEHYDE_FREQ_OUT: &str = r#"
       *********************************************************
       *                  TeraChem v1.9-2021.12                *
       *           Chemistry at the Speed of Graphics!         *
       *********************************************************

Total atoms:        4
Spin multiplicity: 1
Total charge: 0

****** QM coordinates ******
O         1.1969869000         -0.0608050000          0.0943613000
C        -0.0042906000          0.0001434000         -0.0003641000
H        -0.5496322000          0.9668340000         -0.0338581000
H        -0.6430720000         -0.9061691000         -0.0601393000

FINAL ENERGY: -114.5008455547 a.u.

                    *** Reference Geometry ***
Atom    X (Bohr)        Y (Bohr)        Z (Bohr)
  O     2.261989       -0.114905        0.178317
  C    -0.008108        0.000271       -0.000688
  H    -1.038653        1.827038       -0.063982
  H    -1.215229       -1.712404       -0.113647

*** Hessian Matrix (Hartree/Bohr^2) ***
              1              2              3              4              5              6
   1   0.5878000000   0.0216750000   0.0009750000  -0.0114000000   0.0141250000   0.0188500000
   2   0.0216750000   0.5465000000  -0.0283500000   0.0000000000   0.0075500000  -0.0302000000
   3   0.0009750000  -0.0283500000   0.5426000000   0.0160250000  -0.0019500000   0.0113500000
   4  -0.0114000000   0.0000000000   0.0160250000   0.5465000000   0.0198250000   0.0113000000
   5   0.0141250000   0.0075500000  -0.0019500000   0.0198250000   0.5878000000  -0.0151000000
   6   0.0188500000  -0.0302000000   0.0113500000   0.0113000000  -0.0151000000   0.5352000000
   7  -0.0037000000  -0.0027750000   0.0000000000  -0.0018500000  -0.0018500000  -0.0027750000
   8   0.0028750000   0.0084750000  -0.0207500000   0.0122750000   0.0141750000  -0.0395500000
   9   0.0113000000  -0.0320500000   0.0207500000   0.0000500000  -0.0169500000   0.0132000000
  10  -0.0320500000  -0.0018500000   0.0057000000  -0.0339000000  -0.0009250000   0.0066250000
  11   0.0207500000   0.0057000000  -0.0395500000   0.0047250000   0.0151000000  -0.0001000000
  12   0.0000500000  -0.0339000000   0.0047250000   0.0179250000  -0.0114000000   0.0226000000

              7              8              9             10             11             12
   1  -0.0037000000   0.0028750000   0.0113000000  -0.0320500000   0.0207500000   0.0000500000
   2  -0.0027750000   0.0084750000  -0.0320500000  -0.0018500000   0.0057000000  -0.0339000000
   3   0.0000000000  -0.0207500000   0.0207500000   0.0057000000  -0.0395500000   0.0047250000
   4  -0.0018500000   0.0122750000   0.0000500000  -0.0339000000   0.0047250000   0.0179250000
   5  -0.0018500000   0.0141750000  -0.0169500000  -0.0009250000   0.0151000000  -0.0114000000
   6  -0.0027750000  -0.0395500000   0.0132000000   0.0066250000  -0.0001000000   0.0226000000
   7   0.5200000000   0.0216750000   0.0179250000  -0.0283500000   0.0141250000   0.0103750000
   8   0.0216750000   0.5126000000  -0.0055500000   0.0000000000  -0.0009250000  -0.0037000000
   9   0.0179250000  -0.0055500000   0.5426000000   0.0075500000  -0.0189000000   0.0113500000
  10  -0.0283500000   0.0000000000   0.0075500000   0.5804000000   0.0198250000   0.0028250000
  11   0.0141250000  -0.0009250000  -0.0189000000   0.0198250000   0.5539000000  -0.0320500000
  12   0.0103750000  -0.0037000000   0.0113500000   0.0028250000  -0.0320500000   0.5352000000

             Vibrational Frequencies/Thermochemical Analysis
Temperature (K): 298.15
Mode  Eigenvalue(AU)  Frequency(cm-1)  Intensity(km/mol)   Vib.Temp(K)      ZPE(AU)
  1     0.0054611345   1198.6352081        4.6891222061  1724.5589114862   0.0027306730
  2     0.0058146829   1276.1991058       10.1132201517  1836.1517231651   0.0029073414
  3     0.0071241930   1563.6275932        8.5623001247  2249.7023466701   0.0035620965
  4     0.0086262163   1893.2440765       70.7710431129  2723.9464208851   0.0043131081
  5     0.0131089122   2877.0985342       58.0214460077  4139.4698452091   0.0065544561
  6     0.0135478901   2973.4533021      118.3388103012  4278.1014200418   0.0067739450

Vibrational zero-point energy (ZPE) = 70663.209145369200 J/mol =     0.02691420 AU
Job finished: Mon Mar  4 10:22:41 2019
"#;

/// 3 个原子，最后一个分块只有 3 列
pub const WATER_HESSIAN_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        3
Spin multiplicity: 1

*** Hessian Matrix (Hartree/Bohr^2) ***
              1              2              3              4              5              6
   1   0.3746000000  -0.0164000000   0.0205000000  -0.0246000000   0.0287000000  -0.0000000000
   2  -0.0164000000   0.4156000000  -0.0000000000   0.0102500000  -0.0307500000  -0.0020500000
   3   0.0205000000  -0.0000000000   0.3951000000  -0.0061500000   0.0225500000  -0.0041000000
   4  -0.0246000000   0.0102500000  -0.0061500000   0.4197000000  -0.0143500000  -0.0061500000
   5   0.0287000000  -0.0307500000   0.0225500000  -0.0143500000   0.3623000000  -0.0082000000
   6  -0.0000000000  -0.0020500000  -0.0041000000  -0.0061500000  -0.0082000000   0.3500000000
   7   0.0041000000  -0.0082000000   0.0123000000  -0.0164000000   0.0307500000  -0.0348500000
   8  -0.0082000000   0.0184500000  -0.0287000000   0.0061500000  -0.0164000000   0.0266500000
   9   0.0123000000  -0.0287000000   0.0123000000  -0.0287000000   0.0020500000  -0.0184500000

              7              8              9
   1   0.0041000000  -0.0082000000   0.0123000000
   2  -0.0082000000   0.0184500000  -0.0287000000
   3   0.0123000000  -0.0287000000   0.0123000000
   4  -0.0164000000   0.0061500000  -0.0287000000
   5   0.0307500000  -0.0164000000   0.0020500000
   6  -0.0348500000   0.0266500000  -0.0184500000
   7   0.3418000000  -0.0061500000  -0.0082000000
   8  -0.0061500000   0.3582000000  -0.0184500000
   9  -0.0082000000  -0.0184500000   0.4197000000

"#;

pub const FAILED_FREQ_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        4
Spin multiplicity: 1
FINAL ENERGY: -114.5008455547 a.u.

*** Hessian Matrix (Hartree/Bohr^2) ***
Computing Hessian numerically, 24 displacements
Displacement 1 of 24
DIE called at line number 2581 in file terachem/hessian.cpp
"#;

pub const TS_FREQ_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        3
Spin multiplicity: 2

             Vibrational Frequencies/Thermochemical Analysis
Mode  Eigenvalue(AU)  Frequency(cm-1)  Intensity(km/mol)   Vib.Temp(K)      ZPE(AU)
  1    -0.0479451123   1523.4512i     210.0113412001     0.0000000000   0.0000000000
  2     0.0031781021    697.5121130     12.3341002117  1003.5621001112   0.0015890511
  3     0.0101001233   2216.7802211      5.0012011110  3189.4001002133   0.0050500617

Job finished: Mon Mar  4 11:02:11 2019
"#;

pub const DIAGONALIZATION_FAILED_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        3
Spin multiplicity: 1

*** Hessian Matrix (Hartree/Bohr^2) ***
Diagonalizing mass-weighted Hessian
Hessian diagonalization failed: LAPACK dsyev returned info = 7
"#;

pub const WRONG_MULTIPLICITY_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        3
Spin multiplicity: 1
Total charge: 0
Incorrect molecular charge or spin multiplicity. Please check.
"#;

pub const IMAGINARY_ONLY_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        2
Spin multiplicity: 1

             Vibrational Frequencies/Thermochemical Analysis
Mode  Eigenvalue(AU)  Frequency(cm-1)  Intensity(km/mol)   Vib.Temp(K)      ZPE(AU)
  1    -0.0120031123    412.7730i       0.0000000000     0.0000000000   0.0000000000

Job finished: Mon Mar  4 11:40:52 2019
"#;

pub const FORMALDEHYDE_RESULTS_DAT: &str = r#"Total processing time: 4.32 sec
Ground state energy (a.u.):
      -114.5008455547
"#;

pub const ETHANOL_SCAN_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        9
Spin multiplicity: 1

-=#=-     Scan Cycle     1/4     -=#=-
FINAL ENERGY: -155.0314100000 a.u.
FINAL ENERGY: -155.0315200000 a.u.
-=#=- Optimized Energy:    -155.0315243910 a.u.
-=#=-     Scan Cycle     2/4     -=#=-
FINAL ENERGY: -155.0290000000 a.u.
-=#=- Optimized Energy:    -155.0292000000 a.u.
-=#=-     Scan Cycle     3/4     -=#=-
-=#=- Optimized Energy:    -155.0280000000 a.u.
-=#=-     Scan Cycle     4/4     -=#=-
-=#=- Optimized Energy:    -155.0310000000 a.u.
Job finished: Mon Mar  4 12:40:01 2019
"#;

pub const DIHEDRAL_SCAN_OUT: &str = r#"
       *                  TeraChem v1.9-2021.12                *
Total atoms:        8

-=#=-     Scan Cycle     1/4     -=#=-
Dihedral 1-2-3-4 = -180.000 deg
-=#=- Optimized Energy:    -79.8000000000 a.u.
-=#=-     Scan Cycle     2/4     -=#=-
Dihedral 1-2-3-4 = -60.000 deg
-=#=- Optimized Energy:    -79.7950000000 a.u.
-=#=-     Scan Cycle     3/4     -=#=-
Dihedral 1-2-3-4 = 60.000 deg
-=#=- Optimized Energy:    -79.7960000000 a.u.
-=#=-     Scan Cycle     4/4     -=#=-
Dihedral 1-2-3-4 = 180.000 deg
-=#=- Optimized Energy:    -79.8000100000 a.u.
"#;
