pub const BVP_HELPER: &'static str = "
                                General notes \n
The program solves the steady viscous Burgers equation \n
        u*du/dx - eps*d2u/dx2 = 0,   u(x_min) = 1,   u(x_max) = -1 \n
on a uniform grid of 101 nodes. Every iteration the convective term is linearized with the \n
previous iterate, the tridiagonal system is solved directly (Thomas algorithm), the nonlinear \n
residual is evaluated and the new profile is blended into the working one with an \n
over-relaxation factor of 1.99. The grid size and the relaxation factor are fixed. \n

                                Task file \n
The task is a JSON document. All fields sit under solverConfig: \n
{ \n
  \"problemName\": \"optional name\", \n
  \"problemDescription\": \"optional description\", \n
  \"solverConfig\": { \n
    \"epsilon\": 0.1,            diffusion coefficient \n
    \"maxIterations\": 250000,   iteration cap, non-negative integer \n
    \"maxResidual\": 1e-11,      residual tolerance \n
    \"domain\": { \"min\": -1.0, \"max\": 1.0 } \n
  } \n
} \n
A missing field is read as zero. A domain with max <= min is rejected. \n
Files named problem*.json in the working directory are picked up by auto-discovery, \n
a filled template is written by 'Generate template'. \n

                                Result \n
{\"result\":{\"iterations\": N, \"residual\": r, \"time\": ms}} \n
If the iteration cap is reached first the residual stays above the tolerance; this is \n
reported, not treated as a failure. \n
";
