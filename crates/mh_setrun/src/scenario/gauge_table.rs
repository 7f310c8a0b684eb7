// crates/mh_setrun/src/scenario/gauge_table.rs

//! 横断面测站坐标 `(id, 经度, 纬度)`

/// 622 个横断面测站，编号连续
pub const CROSS_SECTION_GAUGES: &[(u32, f64, f64)] = &[
    (0, 94.092882, 29.203368),
    (1, 94.102524, 29.200908),
    (2, 94.113198, 29.203307),
    (3, 94.123246, 29.20316),
    (4, 94.133064, 29.200036),
    (5, 94.143307, 29.199077),
    (6, 94.153584, 29.198277),
    (7, 94.163845, 29.199951),
    (8, 94.174467, 29.200001),
    (9, 94.18259, 29.204216),
    (10, 94.189243, 29.20994),
    (11, 94.198893, 29.213328),
    (12, 94.206638, 29.220049),
    (13, 94.214735, 29.223263),
    (14, 94.220856, 29.231952),
    (15, 94.22746, 29.236663),
    (16, 94.23375, 29.244133),
    (17, 94.239186, 29.252257),
    (18, 94.245848, 29.258796),
    (19, 94.254345, 29.263563),
    (20, 94.2621, 29.25998),
    (21, 94.272004, 29.250748),
    (22, 94.282378, 29.252455),
    (23, 94.287965, 29.262026),
    (24, 94.296683, 29.267471),
    (25, 94.303346, 29.2737),
    (26, 94.304159, 29.283684),
    (27, 94.309018, 29.291673),
    (28, 94.317549, 29.296874),
    (29, 94.319182, 29.306517),
    (30, 94.326752, 29.312463),
    (31, 94.335926, 29.316618),
    (32, 94.346303, 29.317416),
    (33, 94.355885, 29.321651),
    (34, 94.362511, 29.327471),
    (35, 94.370817, 29.331676),
    (36, 94.380023, 29.336196),
    (37, 94.387279, 29.342322),
    (38, 94.395286, 29.348295),
    (39, 94.397724, 29.358327),
    (40, 94.407044, 29.362929),
    (41, 94.41443, 29.369224),
    (42, 94.421304, 29.375931),
    (43, 94.425868, 29.383919),
    (44, 94.431977, 29.391255),
    (45, 94.435795, 29.39962),
    (46, 94.440086, 29.407748),
    (47, 94.447418, 29.413154),
    (48, 94.45741, 29.415317),
    (49, 94.467535, 29.417601),
    (50, 94.476154, 29.422452),
    (51, 94.483716, 29.428303),
    (52, 94.48998, 29.435811),
    (53, 94.498641, 29.440105),
    (54, 94.507302, 29.4425),
    (55, 94.515964, 29.445056),
    (56, 94.525451, 29.450814),
    (57, 94.535289, 29.448295),
    (58, 94.545351, 29.444931),
    (59, 94.554462, 29.44977),
    (60, 94.562506, 29.455067),
    (61, 94.563395, 29.467541),
    (62, 94.569045, 29.470041),
    (63, 94.5625, 29.483956),
    (64, 94.573358, 29.48432),
    (65, 94.582622, 29.484924),
    (66, 94.592061, 29.482545),
    (67, 94.600622, 29.481326),
    (68, 94.609189, 29.4763),
    (69, 94.617988, 29.472162),
    (70, 94.628735, 29.473345),
    (71, 94.638334, 29.469302),
    (72, 94.648625, 29.469178),
    (73, 94.658754, 29.469582),
    (74, 94.668796, 29.471611),
    (75, 94.678571, 29.470347),
    (76, 94.685, 29.462354),
    (77, 94.696174, 29.46256),
    (78, 94.705812, 29.459197),
    (79, 94.714056, 29.458377),
    (80, 94.722017, 29.45918),
    (81, 94.73072, 29.463292),
    (82, 94.736675, 29.470578),
    (83, 94.744285, 29.476644),
    (84, 94.753153, 29.480993),
    (85, 94.763354, 29.479956),
    (86, 94.772962, 29.479393),
    (87, 94.782075, 29.475323),
    (88, 94.789215, 29.468867),
    (89, 94.796317, 29.46231),
    (90, 94.806094, 29.459615),
    (91, 94.816203, 29.461385),
    (92, 94.823766, 29.466572),
    (93, 94.824142, 29.472693),
    (94, 94.825992, 29.482169),
    (95, 94.824842, 29.491123),
    (96, 94.829483, 29.49884),
    (97, 94.832515, 29.506096),
    (98, 94.839911, 29.512381),
    (99, 94.848187, 29.517474),
    (100, 94.857495, 29.519918),
    (101, 94.867789, 29.520019),
    (102, 94.87788, 29.520758),
    (103, 94.885914, 29.525567),
    (104, 94.887549, 29.53417),
    (105, 94.887205, 29.540888),
    (106, 94.880791, 29.548158),
    (107, 94.883223, 29.55689),
    (108, 94.889996, 29.563739),
    (109, 94.897909, 29.569195),
    (110, 94.899936, 29.577877),
    (111, 94.906633, 29.583304),
    (112, 94.914531, 29.587558),
    (113, 94.923428, 29.588368),
    (114, 94.92589, 29.596641),
    (115, 94.934337, 29.601672),
    (116, 94.934989, 29.608557),
    (117, 94.928414, 29.612571),
    (118, 94.926668, 29.621226),
    (119, 94.926663, 29.629303),
    (120, 94.918234, 29.626678),
    (121, 94.908698, 29.624947),
    (122, 94.899461, 29.627506),
    (123, 94.887968, 29.62503),
    (124, 94.879787, 29.628633),
    (125, 94.876728, 29.636781),
    (126, 94.882251, 29.643715),
    (127, 94.891324, 29.646721),
    (128, 94.900216, 29.651216),
    (129, 94.90899, 29.655827),
    (130, 94.917191, 29.660866),
    (131, 94.919958, 29.6693),
    (132, 94.918344, 29.677579),
    (133, 94.912668, 29.68149),
    (134, 94.902589, 29.680628),
    (135, 94.893312, 29.684442),
    (136, 94.891584, 29.692495),
    (137, 94.8934, 29.700999),
    (138, 94.900649, 29.706666),
    (139, 94.908329, 29.710703),
    (140, 94.91752, 29.715344),
    (141, 94.925207, 29.720776),
    (142, 94.93414, 29.724145),
    (143, 94.932437, 29.732956),
    (144, 94.932515, 29.740755),
    (145, 94.938108, 29.746666),
    (146, 94.944697, 29.75256),
    (147, 94.953548, 29.755833),
    (148, 94.963506, 29.755882),
    (149, 94.972851, 29.759999),
    (150, 94.982587, 29.763342),
    (151, 94.990616, 29.769151),
    (152, 94.999424, 29.768312),
    (153, 95.00584, 29.762775),
    (154, 95.015246, 29.758199),
    (155, 95.022496, 29.752371),
    (156, 95.031436, 29.749223),
    (157, 95.037424, 29.755624),
    (158, 95.040966, 29.762359),
    (159, 95.049176, 29.766671),
    (160, 95.059015, 29.769196),
    (161, 95.066795, 29.76581),
    (162, 95.072423, 29.759545),
    (163, 95.075793, 29.750908),
    (164, 95.073325, 29.742044),
    (165, 95.081017, 29.73666),
    (166, 95.085393, 29.744917),
    (167, 95.093228, 29.749548),
    (168, 95.101014, 29.74751),
    (169, 95.108002, 29.741206),
    (170, 95.115815, 29.746403),
    (171, 95.12259, 29.75282),
    (172, 95.131258, 29.754197),
    (173, 95.137829, 29.76081),
    (174, 95.145926, 29.762364),
    (175, 95.155064, 29.759088),
    (176, 95.163316, 29.76384),
    (177, 95.173232, 29.764387),
    (178, 95.182374, 29.759072),
    (179, 95.18675, 29.762653),
    (180, 95.187483, 29.771029),
    (181, 95.183795, 29.776671),
    (182, 95.176942, 29.782669),
    (183, 95.172799, 29.788134),
    (184, 95.169943, 29.782431),
    (185, 95.161646, 29.787524),
    (186, 95.153312, 29.792616),
    (187, 95.147453, 29.799943),
    (188, 95.143307, 29.808404),
    (189, 95.135006, 29.813958),
    (190, 95.126298, 29.815865),
    (191, 95.117794, 29.82082),
    (192, 95.113338, 29.82783),
    (193, 95.10326, 29.827483),
    (194, 95.093505, 29.829142),
    (195, 95.090013, 29.837078),
    (196, 95.087323, 29.8433),
    (197, 95.084045, 29.850794),
    (198, 95.092755, 29.851658),
    (199, 95.102357, 29.854166),
    (200, 95.108323, 29.861448),
    (201, 95.11329, 29.869354),
    (202, 95.117389, 29.87738),
    (203, 95.124137, 29.873974),
    (204, 95.131426, 29.868039),
    (205, 95.139336, 29.868643),
    (206, 95.145469, 29.875601),
    (207, 95.147472, 29.883844),
    (208, 95.145764, 29.892161),
    (209, 95.145768, 29.900296),
    (210, 95.153635, 29.90418),
    (211, 95.162492, 29.901605),
    (212, 95.172529, 29.90085),
    (213, 95.182213, 29.899878),
    (214, 95.188411, 29.892819),
    (215, 95.195061, 29.886802),
    (216, 95.192512, 29.87945),
    (217, 95.189867, 29.870795),
    (218, 95.200163, 29.872526),
    (219, 95.207854, 29.877436),
    (220, 95.216876, 29.879143),
    (221, 95.218935, 29.873394),
    (222, 95.210503, 29.869117),
    (223, 95.208305, 29.861082),
    (224, 95.209093, 29.852556),
    (225, 95.204097, 29.845202),
    (226, 95.200015, 29.837303),
    (227, 95.206234, 29.829974),
    (228, 95.21391, 29.824874),
    (229, 95.221162, 29.81861),
    (230, 95.229321, 29.817386),
    (231, 95.235642, 29.823358),
    (232, 95.244913, 29.825023),
    (233, 95.255177, 29.82502),
    (234, 95.26551, 29.825071),
    (235, 95.273981, 29.828389),
    (236, 95.281023, 29.831709),
    (237, 95.285456, 29.824866),
    (238, 95.288363, 29.816834),
    (239, 95.290026, 29.808398),
    (240, 95.292512, 29.800135),
    (241, 95.295914, 29.792275),
    (242, 95.297472, 29.783899),
    (243, 95.295805, 29.775454),
    (244, 95.296599, 29.766944),
    (245, 95.297385, 29.759191),
    (246, 95.303271, 29.752194),
    (247, 95.304129, 29.743425),
    (248, 95.305814, 29.734911),
    (249, 95.310455, 29.727489),
    (250, 95.315902, 29.721526),
    (251, 95.3183, 29.713962),
    (252, 95.322474, 29.705725),
    (253, 95.329249, 29.709054),
    (254, 95.337608, 29.710822),
    (255, 95.345679, 29.706821),
    (256, 95.354778, 29.706514),
    (257, 95.361668, 29.705656),
    (258, 95.362589, 29.696844),
    (259, 95.364695, 29.68857),
    (260, 95.370358, 29.681449),
    (261, 95.376602, 29.674505),
    (262, 95.379236, 29.667023),
    (263, 95.373841, 29.660818),
    (264, 95.36418, 29.659099),
    (265, 95.362493, 29.650557),
    (266, 95.360015, 29.642207),
    (267, 95.355781, 29.634521),
    (268, 95.359486, 29.626615),
    (269, 95.36824, 29.629622),
    (270, 95.376744, 29.63252),
    (271, 95.385821, 29.630781),
    (272, 95.389131, 29.622802),
    (273, 95.392526, 29.614933),
    (274, 95.389189, 29.608147),
    (275, 95.381778, 29.602201),
    (276, 95.375848, 29.594968),
    (277, 95.37422, 29.586118),
    (278, 95.37582, 29.577096),
    (279, 95.37434, 29.568279),
    (280, 95.382187, 29.567211),
    (281, 95.390569, 29.56672),
    (282, 95.394921, 29.559154),
    (283, 95.394212, 29.550653),
    (284, 95.388684, 29.544147),
    (285, 95.378758, 29.543307),
    (286, 95.37117, 29.538992),
    (287, 95.368359, 29.53084),
    (288, 95.372812, 29.525023),
    (289, 95.382642, 29.524192),
    (290, 95.39262, 29.52335),
    (291, 95.40224, 29.524993),
    (292, 95.410643, 29.524356),
    (293, 95.412871, 29.516246),
    (294, 95.416756, 29.508542),
    (295, 95.418974, 29.500574),
    (296, 95.409402, 29.49919),
    (297, 95.404131, 29.491812),
    (298, 95.410453, 29.484979),
    (299, 95.419171, 29.481944),
    (300, 95.427441, 29.477986),
    (301, 95.435538, 29.474163),
    (302, 95.441682, 29.468106),
    (303, 95.436994, 29.460836),
    (304, 95.426906, 29.460834),
    (305, 95.419166, 29.455905),
    (306, 95.414952, 29.448276),
    (307, 95.409165, 29.4425),
    (308, 95.401636, 29.436912),
    (309, 95.400833, 29.428901),
    (310, 95.405038, 29.421529),
    (311, 95.397624, 29.416664),
    (312, 95.388222, 29.41503),
    (313, 95.380556, 29.410133),
    (314, 95.375806, 29.402718),
    (315, 95.374985, 29.394234),
    (316, 95.366267, 29.3917),
    (317, 95.358315, 29.386541),
    (318, 95.354934, 29.378565),
    (319, 95.353307, 29.370021),
    (320, 95.349199, 29.362623),
    (321, 95.342492, 29.356101),
    (322, 95.336182, 29.349243),
    (323, 95.330107, 29.341906),
    (324, 95.322991, 29.335815),
    (325, 95.315651, 29.329945),
    (326, 95.307717, 29.32503),
    (327, 95.298978, 29.321646),
    (328, 95.291774, 29.324203),
    (329, 95.283322, 29.328343),
    (330, 95.277142, 29.323522),
    (331, 95.28003, 29.317458),
    (332, 95.291264, 29.312454),
    (333, 95.288565, 29.306327),
    (334, 95.279687, 29.302198),
    (335, 95.273327, 29.294992),
    (336, 95.266038, 29.289128),
    (337, 95.258023, 29.28503),
    (338, 95.251053, 29.279207),
    (339, 95.241135, 29.278365),
    (340, 95.23324, 29.274126),
    (341, 95.225232, 29.269205),
    (342, 95.21586, 29.27157),
    (343, 95.207875, 29.275815),
    (344, 95.198975, 29.274176),
    (345, 95.197873, 29.266166),
    (346, 95.199399, 29.258293),
    (347, 95.190181, 29.255059),
    (348, 95.180215, 29.254924),
    (349, 95.171669, 29.25181),
    (350, 95.164632, 29.246086),
    (351, 95.158181, 29.240045),
    (352, 95.148746, 29.237559),
    (353, 95.14021, 29.235872),
    (354, 95.13295, 29.229681),
    (355, 95.126422, 29.222952),
    (356, 95.119474, 29.216284),
    (357, 95.112526, 29.210003),
    (358, 95.103186, 29.209183),
    (359, 95.092954, 29.21128),
    (360, 95.089987, 29.203182),
    (361, 95.08918, 29.194316),
    (362, 95.087453, 29.185285),
    (363, 95.07665, 29.186648),
    (364, 95.067753, 29.186679),
    (365, 95.057866, 29.185059),
    (366, 95.049276, 29.182527),
    (367, 95.040023, 29.179943),
    (368, 95.031343, 29.177483),
    (369, 95.022464, 29.174754),
    (370, 95.013879, 29.170855),
    (371, 95.00671, 29.17697),
    (372, 94.997441, 29.18004),
    (373, 94.988276, 29.177536),
    (374, 94.993877, 29.16999),
    (375, 95.0007, 29.16334),
    (376, 95.007289, 29.156597),
    (377, 95.013255, 29.149426),
    (378, 95.014996, 29.140501),
    (379, 95.017665, 29.132751),
    (380, 95.025006, 29.125039),
    (381, 95.015736, 29.119104),
    (382, 95.00527, 29.11998),
    (383, 94.995335, 29.120076),
    (384, 94.987, 29.119237),
    (385, 94.976806, 29.119136),
    (386, 94.967143, 29.120031),
    (387, 94.960855, 29.116983),
    (388, 94.957531, 29.108925),
    (389, 94.952506, 29.10209),
    (390, 94.949162, 29.094156),
    (391, 94.94422, 29.086785),
    (392, 94.938454, 29.079704),
    (393, 94.933062, 29.072349),
    (394, 94.930917, 29.063814),
    (395, 94.928356, 29.055856),
    (396, 94.920828, 29.050617),
    (397, 94.912757, 29.047523),
    (398, 94.902629, 29.047491),
    (399, 94.901768, 29.040466),
    (400, 94.900002, 29.03183),
    (401, 94.896641, 29.024201),
    (402, 94.903407, 29.017448),
    (403, 94.900902, 29.009464),
    (404, 94.899185, 29.001063),
    (405, 94.9047, 28.995883),
    (406, 94.905068, 28.98756),
    (407, 94.89764, 28.981664),
    (408, 94.888037, 28.98042),
    (409, 94.884219, 28.972962),
    (410, 94.88171, 28.964265),
    (411, 94.872589, 28.961651),
    (412, 94.864998, 28.956804),
    (413, 94.857584, 28.951665),
    (414, 94.849279, 28.947475),
    (415, 94.840837, 28.943863),
    (416, 94.830747, 28.9433),
    (417, 94.822379, 28.940018),
    (418, 94.82042, 28.932188),
    (419, 94.815499, 28.924971),
    (420, 94.806049, 28.925761),
    (421, 94.798271, 28.930469),
    (422, 94.788334, 28.92995),
    (423, 94.780365, 28.924206),
    (424, 94.77992, 28.914996),
    (425, 94.778142, 28.906684),
    (426, 94.775821, 28.898519),
    (427, 94.77158, 28.8906),
    (428, 94.770555, 28.881648),
    (429, 94.762036, 28.878335),
    (430, 94.757514, 28.869918),
    (431, 94.769233, 28.869979),
    (432, 94.778921, 28.869924),
    (433, 94.787916, 28.86833),
    (434, 94.795002, 28.862491),
    (435, 94.80081, 28.85571),
    (436, 94.800327, 28.846932),
    (437, 94.792513, 28.841285),
    (438, 94.782327, 28.842488),
    (439, 94.775983, 28.835009),
    (440, 94.773903, 28.826474),
    (441, 94.782853, 28.822546),
    (442, 94.792421, 28.821678),
    (443, 94.79973, 28.815827),
    (444, 94.804976, 28.808193),
    (445, 94.810509, 28.801631),
    (446, 94.816615, 28.808176),
    (447, 94.819182, 28.816349),
    (448, 94.82638, 28.821952),
    (449, 94.835326, 28.825776),
    (450, 94.842739, 28.819946),
    (451, 94.850813, 28.815018),
    (452, 94.860819, 28.814183),
    (453, 94.869968, 28.816832),
    (454, 94.876709, 28.823343),
    (455, 94.884789, 28.820776),
    (456, 94.89341, 28.815886),
    (457, 94.902436, 28.814128),
    (458, 94.909881, 28.809973),
    (459, 94.917508, 28.805088),
    (460, 94.92613, 28.800751),
    (461, 94.930837, 28.79353),
    (462, 94.923537, 28.78852),
    (463, 94.914853, 28.785826),
    (464, 94.908104, 28.792316),
    (465, 94.899271, 28.795864),
    (466, 94.89165, 28.790264),
    (467, 94.885573, 28.783509),
    (468, 94.877886, 28.78),
    (469, 94.867781, 28.777486),
    (470, 94.865077, 28.768766),
    (471, 94.864317, 28.76096),
    (472, 94.868353, 28.752912),
    (473, 94.878941, 28.755029),
    (474, 94.88755, 28.75755),
    (475, 94.895059, 28.762457),
    (476, 94.901936, 28.758841),
    (477, 94.909275, 28.752928),
    (478, 94.91663, 28.747886),
    (479, 94.922562, 28.740786),
    (480, 94.930023, 28.735332),
    (481, 94.939135, 28.733116),
    (482, 94.9475, 28.729041),
    (483, 94.954996, 28.72506),
    (484, 94.961459, 28.718291),
    (485, 94.96826, 28.712222),
    (486, 94.975008, 28.705829),
    (487, 94.981658, 28.699644),
    (488, 94.979719, 28.692256),
    (489, 94.975704, 28.68395),
    (490, 94.975057, 28.67656),
    (491, 94.978529, 28.669242),
    (492, 94.98542, 28.668278),
    (493, 94.988988, 28.677418),
    (494, 94.996867, 28.674135),
    (495, 95.006561, 28.67292),
    (496, 95.01375, 28.668417),
    (497, 95.010812, 28.659992),
    (498, 95.00792, 28.652323),
    (499, 95.013878, 28.645291),
    (500, 95.014475, 28.636383),
    (501, 95.018322, 28.628413),
    (502, 95.026043, 28.62229),
    (503, 95.029919, 28.614466),
    (504, 95.032874, 28.606526),
    (505, 95.036616, 28.598579),
    (506, 95.045148, 28.594996),
    (507, 95.054606, 28.593279),
    (508, 95.063692, 28.591237),
    (509, 95.068571, 28.583861),
    (510, 95.0712, 28.575739),
    (511, 95.073252, 28.567398),
    (512, 95.07708, 28.559642),
    (513, 95.07742, 28.550892),
    (514, 95.07958, 28.542434),
    (515, 95.079083, 28.533464),
    (516, 95.08037, 28.524669),
    (517, 95.079142, 28.516002),
    (518, 95.080836, 28.50778),
    (519, 95.089131, 28.503337),
    (520, 95.097949, 28.500804),
    (521, 95.10125, 28.493127),
    (522, 95.0983, 28.485092),
    (523, 95.093379, 28.477473),
    (524, 95.097875, 28.469941),
    (525, 95.101269, 28.462061),
    (526, 95.099166, 28.454278),
    (527, 95.091642, 28.448251),
    (528, 95.090772, 28.439445),
    (529, 95.087546, 28.431501),
    (530, 95.081641, 28.424218),
    (531, 95.073362, 28.419992),
    (532, 95.06659, 28.413262),
    (533, 95.072444, 28.40648),
    (534, 95.077445, 28.39897),
    (535, 95.07666, 28.390463),
    (536, 95.074089, 28.382368),
    (537, 95.070898, 28.374287),
    (538, 95.070808, 28.365422),
    (539, 95.065771, 28.358395),
    (540, 95.058262, 28.352516),
    (541, 95.048531, 28.351624),
    (542, 95.039373, 28.34999),
    (543, 95.032467, 28.343949),
    (544, 95.030005, 28.336065),
    (545, 95.026376, 28.326662),
    (546, 95.020276, 28.330787),
    (547, 95.014649, 28.341737),
    (548, 95.006417, 28.34582),
    (549, 94.996674, 28.344654),
    (550, 94.992479, 28.337272),
    (551, 94.995065, 28.329203),
    (552, 94.999186, 28.321824),
    (553, 94.993693, 28.315078),
    (554, 94.984924, 28.31163),
    (555, 94.974833, 28.314183),
    (556, 94.96619, 28.314146),
    (557, 94.958334, 28.310398),
    (558, 94.95247, 28.304881),
    (559, 94.950801, 28.2962),
    (560, 94.950041, 28.287349),
    (561, 94.956638, 28.280786),
    (562, 94.965802, 28.278364),
    (563, 94.973478, 28.28662),
    (564, 94.979879, 28.28665),
    (565, 94.982245, 28.278289),
    (566, 94.98625, 28.270808),
    (567, 94.98708, 28.26206),
    (568, 94.988357, 28.25352),
    (569, 94.988713, 28.244549),
    (570, 94.995499, 28.2383),
    (571, 95.003509, 28.23411),
    (572, 95.00625, 28.226102),
    (573, 95.007522, 28.217603),
    (574, 95.00875, 28.208891),
    (575, 95.007419, 28.200163),
    (576, 95.010667, 28.192463),
    (577, 95.020831, 28.192431),
    (578, 95.02708, 28.186907),
    (579, 95.030229, 28.178939),
    (580, 95.036617, 28.171767),
    (581, 95.044153, 28.166863),
    (582, 95.051174, 28.160823),
    (583, 95.05916, 28.155584),
    (584, 95.068268, 28.153256),
    (585, 95.077192, 28.150787),
    (586, 95.085829, 28.147545),
    (587, 95.094693, 28.144991),
    (588, 95.102471, 28.140978),
    (589, 95.110725, 28.136606),
    (590, 95.120296, 28.134926),
    (591, 95.130097, 28.134084),
    (592, 95.139549, 28.136159),
    (593, 95.145083, 28.143347),
    (594, 95.153574, 28.146682),
    (595, 95.161647, 28.150739),
    (596, 95.17093, 28.152481),
    (597, 95.179149, 28.156536),
    (598, 95.186607, 28.162033),
    (599, 95.196612, 28.162426),
    (600, 95.200982, 28.167541),
    (601, 95.204057, 28.175027),
    (602, 95.212903, 28.176575),
    (603, 95.216146, 28.170471),
    (604, 95.223175, 28.16421),
    (605, 95.232262, 28.16708),
    (606, 95.242037, 28.16752),
    (607, 95.24875, 28.163901),
    (608, 95.254032, 28.156656),
    (609, 95.263112, 28.154166),
    (610, 95.271026, 28.149956),
    (611, 95.27955, 28.146618),
    (612, 95.286787, 28.140644),
    (613, 95.29208, 28.133405),
    (614, 95.29375, 28.124938),
    (615, 95.288557, 28.11846),
    (616, 95.28245, 28.113315),
    (617, 95.282601, 28.10428),
    (618, 95.291528, 28.101667),
    (619, 95.301539, 28.100832),
    (620, 95.311297, 28.099217),
    (621, 95.321755, 28.096932),
];
