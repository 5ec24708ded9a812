mod mesh_tests;
