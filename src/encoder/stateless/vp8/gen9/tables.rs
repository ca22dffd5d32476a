// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Constant tables consumed by the Gen9 VP8 encoding kernels.

/// Main reference selection indexed by the reference frame control mask.
pub(crate) const MAINREF_TABLE: [u8; 8] = [
    0, 1, 2, 9, 3, 13, 14, 57,
];

/// Number of active references indexed by the reference frame control mask.
pub(crate) const NUM_REFS: [u8; 8] = [
    0, 1, 1, 2, 1, 2, 2, 3,
];

pub(crate) const QUANT_DC: [u16; 128] = [
    4, 5, 6, 7, 8, 9, 10, 10, 11, 12, 13, 14, 15, 16, 17, 17,
    18, 19, 20, 20, 21, 21, 22, 22, 23, 23, 24, 25, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 37, 38, 39, 40, 41, 42, 43,
    44, 45, 46, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58,
    59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
    75, 76, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89,
    91, 93, 95, 96, 98, 100, 101, 102, 104, 106, 108, 110, 112, 114, 116, 118,
    122, 124, 126, 128, 130, 132, 134, 136, 138, 140, 143, 145, 148, 151, 154, 157,
];

pub(crate) const QUANT_AC: [u16; 128] = [
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 60, 62, 64, 66, 68, 70, 72, 74, 76,
    78, 80, 82, 84, 86, 88, 90, 92, 94, 96, 98, 100, 102, 104, 106, 108,
    110, 112, 114, 116, 119, 122, 125, 128, 131, 134, 137, 140, 143, 146, 149, 152,
    155, 158, 161, 164, 167, 170, 173, 177, 181, 185, 189, 193, 197, 201, 205, 209,
    213, 217, 221, 225, 229, 234, 239, 245, 249, 254, 259, 264, 269, 274, 279, 284,
];

pub(crate) const MB_MODE_COST_LUMA: [u16; 10] = [
    657, 869, 915, 917, 208, 0, 0, 0, 0, 0,
];

/// Indexed as `[above][left][mode]`.
pub(crate) const BLOCK_MODE_COST: [u16; 1000] = [
    37, 1725, 1868, 1151, 1622, 2096, 2011, 1770, 2218, 2128,
    139, 759, 1683, 911, 1455, 1846, 1570, 1295, 1792, 1648,
    560, 1383, 408, 639, 1612, 1174, 1562, 1736, 847, 991,
    191, 1293, 1299, 466, 1774, 1840, 1784, 1691, 1698, 1505,
    211, 1624, 1294, 779, 714, 1622, 2222, 1554, 1706, 903,
    297, 1259, 1098, 1062, 1583, 618, 1053, 1889, 851, 1127,
    275, 703, 1356, 1111, 1597, 1075, 656, 1529, 1531, 1275,
    150, 1046, 1760, 1039, 1353, 1981, 2174, 728, 1730, 1379,
    516, 1414, 741, 1045, 1495, 738, 1288, 1619, 442, 1200,
    424, 1365, 706, 825, 1197, 1453, 1191, 1462, 1186, 519,
    393, 515, 1491, 549, 1598, 1524, 964, 1126, 1651, 2172,
    693, 237, 1954, 641, 1525, 2073, 1183, 971, 1973, 2235,
    560, 739, 855, 836, 1224, 1115, 966, 839, 1076, 767,
    657, 368, 1406, 425, 1672, 1853, 1210, 1125, 1969, 1542,
    321, 1056, 1776, 774, 803, 3311, 1265, 1177, 1366, 636,
    693, 510, 949, 877, 1049, 658, 882, 1178, 1515, 1111,
    744, 377, 1278, 958, 1576, 1168, 477, 1146, 1838, 1501,
    488, 477, 1767, 973, 1107, 1511, 1773, 486, 1527, 1449,
    744, 1004, 695, 1012, 1326, 834, 1215, 774, 724, 704,
    522, 567, 1036, 1082, 1039, 1333, 873, 1135, 1189, 677,
    103, 1441, 1000, 864, 1513, 1928, 1832, 1916, 1663, 1567,
    304, 872, 1100, 515, 1416, 1417, 3463, 1051, 1305, 1227,
    684, 2176, 242, 729, 1867, 1496, 2056, 1544, 1038, 930,
    534, 1198, 669, 300, 1805, 1377, 2165, 1894, 1249, 1153,
    346, 1602, 1178, 612, 997, 3381, 1335, 1328, 997, 646,
    393, 1027, 649, 813, 1276, 945, 1545, 1278, 875, 1031,
    528, 996, 930, 617, 1086, 1190, 621, 2760, 787, 1347,
    216, 873, 1595, 738, 1339, 3896, 3898, 743, 1343, 1605,
    675, 1580, 543, 749, 1859, 1245, 1589, 2377, 384, 1075,
    594, 1163, 415, 684, 1474, 1080, 1491, 1478, 1077, 801,
    238, 1131, 1483, 398, 1510, 1651, 1495, 1545, 1970, 2090,
    499, 456, 1499, 449, 1558, 1691, 1272, 969, 2114, 2116,
    675, 1386, 318, 645, 1449, 1588, 1666, 1925, 979, 859,
    467, 957, 1223, 238, 1825, 1704, 1608, 1560, 1665, 1376,
    331, 1460, 1238, 627, 787, 1882, 3928, 1544, 1897, 579,
    457, 1038, 903, 784, 1158, 725, 955, 1517, 842, 1016,
    505, 497, 1131, 812, 1508, 1206, 703, 1072, 1254, 1256,
    397, 741, 1336, 642, 1506, 1852, 1340, 599, 1854, 1000,
    625, 1212, 597, 750, 1291, 1057, 1401, 1401, 527, 954,
    499, 1041, 654, 752, 1299, 1217, 1605, 1424, 1377, 505,
    263, 1094, 1218, 602, 938, 1487, 1231, 1016, 1724, 1448,
    452, 535, 1728, 562, 1008, 1471, 1473, 873, 3182, 1136,
    553, 1570, 935, 1093, 826, 1339, 879, 1007, 1006, 476,
    365, 900, 1050, 582, 866, 1398, 1236, 1123, 1608, 1039,
    294, 2044, 1790, 1143, 430, 1642, 3688, 1549, 2080, 704,
    703, 1210, 958, 815, 1211, 960, 623, 2455, 815, 559,
    675, 574, 862, 1261, 866, 864, 761, 1267, 1014, 936,
    342, 1254, 1857, 989, 612, 1856, 1858, 553, 1840, 1037,
    553, 1316, 811, 1072, 1068, 728, 1328, 1317, 1064, 475,
    288, 1303, 1167, 1167, 823, 1634, 1636, 2497, 1294, 491,
    227, 1059, 1369, 1066, 1505, 740, 970, 1511, 972, 1775,
    516, 587, 1033, 646, 1188, 748, 978, 1445, 1294, 1450,
    684, 1048, 663, 747, 1126, 826, 1386, 1128, 635, 924,
    494, 814, 933, 510, 1606, 951, 878, 1344, 1031, 1347,
    553, 1071, 1327, 726, 809, 3376, 1330, 1324, 1062, 407,
    625, 1120, 988, 1121, 1197, 347, 1064, 1308, 862, 1206,
    633, 853, 1657, 1073, 1662, 634, 460, 1405, 811, 1155,
    505, 621, 1394, 876, 1394, 876, 878, 795, 878, 1399,
    684, 1302, 968, 1704, 1280, 561, 972, 1713, 387, 1104,
    397, 1447, 1060, 867, 957, 1058, 749, 1475, 1210, 660,
    331, 933, 1647, 761, 1647, 998, 513, 1402, 1461, 2219,
    573, 485, 1968, 641, 1570, 1198, 588, 1086, 1382, 1982,
    790, 942, 570, 790, 1607, 1005, 938, 1193, 714, 751,
    511, 745, 1152, 492, 1878, 1206, 596, 1867, 1617, 1157,
    452, 1308, 896, 896, 451, 1308, 3354, 1301, 1306, 794,
    693, 670, 1072, 1020, 1687, 566, 488, 1432, 1096, 3142,
    778, 566, 1993, 1283, 3139, 1251, 227, 1378, 1784, 1447,
    393, 937, 1091, 934, 939, 1348, 1092, 579, 1351, 1095,
    560, 1013, 1007, 1014, 1011, 644, 1165, 1155, 605, 1016,
    567, 627, 997, 793, 2562, 998, 849, 1260, 922, 748,
    338, 762, 1868, 717, 1247, 1757, 1263, 535, 1751, 2162,
    488, 442, 3235, 756, 1658, 1814, 1264, 528, 1857, 2119,
    522, 1087, 840, 1103, 843, 1354, 1098, 888, 946, 588,
    483, 688, 1502, 651, 1213, 1446, 1397, 491, 1908, 1253,
    452, 1386, 1910, 1175, 298, 1507, 3553, 930, 1904, 905,
    713, 839, 716, 715, 932, 719, 931, 848, 3088, 1042,
    516, 495, 1331, 1340, 1331, 1069, 665, 702, 1593, 1337,
    401, 977, 2167, 1537, 1069, 1764, 3810, 259, 3624, 1578,
    560, 1104, 601, 1371, 965, 658, 2704, 779, 967, 969,
    547, 1057, 801, 1141, 1133, 1397, 937, 605, 1252, 631,
    163, 1240, 925, 983, 1653, 1321, 1353, 1566, 946, 1601,
    401, 726, 758, 836, 1241, 926, 1656, 795, 1394, 1396,
    905, 1073, 366, 876, 1436, 1576, 1732, 2432, 459, 1019,
    594, 922, 835, 417, 1387, 1124, 1098, 2042, 843, 1023,
    415, 1262, 860, 1274, 758, 1272, 3318, 1010, 1276, 503,
    641, 1018, 1020, 1095, 1619, 667, 1371, 2348, 397, 849,
    560, 817, 903, 1014, 1420, 695, 756, 904, 821, 1421,
    406, 596, 1001, 993, 1257, 1258, 1260, 746, 1002, 1264,
    979, 1371, 780, 1188, 1693, 1024, 1286, 1699, 183, 1405,
    733, 1292, 458, 884, 1554, 889, 1151, 1286, 738, 740,
    109, 1377, 1177, 933, 1140, 1928, 1639, 1705, 1861, 1292,
    342, 570, 1081, 638, 1154, 1231, 1339, 1342, 1750, 1494,
    560, 1203, 345, 767, 1325, 1681, 1425, 1905, 1205, 786,
    406, 1027, 1011, 410, 1306, 1901, 1389, 1636, 1493, 776,
    206, 1329, 1337, 1037, 802, 1600, 3646, 1451, 1603, 693,
    472, 1167, 758, 911, 1424, 703, 2749, 1428, 703, 764,
    342, 780, 1139, 889, 1290, 1139, 781, 1544, 957, 1042,
    227, 888, 1039, 929, 988, 3753, 1707, 818, 1710, 1306,
    767, 1055, 627, 725, 1312, 980, 1065, 1324, 599, 811,
    304, 1372, 888, 1173, 979, 1578, 1580, 1974, 1318, 482,
];

/// QP adjustment, distortion threshold, max frame threshold and distortion QP adjustment tables.
pub(crate) const BRC_QP_ADJUSTMENT: [u8; 576] = [
    0x01, 0x03, 0x05, 0x07, 0x09, 0x01, 0x02, 0x03, 0x05, 0x07, 0x00, 0x00, 0x01, 0x02, 0x04, 0x00,
    0x00, 0x00, 0x01, 0x02, 0xff, 0x00, 0x00, 0x00, 0x01, 0xfd, 0xfe, 0xff, 0x00, 0x00, 0xfb, 0xfc,
    0xfe, 0xff, 0x00, 0xf9, 0xfa, 0xfc, 0xfe, 0xff, 0xf7, 0xf9, 0xfb, 0xfe, 0xff, 0x00, 0x04, 0x1e,
    0x3c, 0x50, 0x78, 0x8c, 0xc8, 0xff, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x02, 0x05, 0x08, 0x0a, 0x01, 0x02, 0x04, 0x06, 0x08, 0x00, 0x01, 0x02, 0x04, 0x06, 0x00,
    0x00, 0x00, 0x01, 0x02, 0xff, 0x00, 0x00, 0x00, 0x01, 0xfe, 0xff, 0xff, 0x00, 0x00, 0xfd, 0xfe,
    0xff, 0xff, 0x00, 0xfb, 0xfd, 0xfe, 0xff, 0x00, 0xf9, 0xfa, 0xfc, 0xfe, 0xff, 0x00, 0x04, 0x1e,
    0x3c, 0x50, 0x78, 0x8c, 0xc8, 0xff, 0x04, 0x05, 0x06, 0x06, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x02, 0x05, 0x08, 0x0a, 0x01, 0x02, 0x04, 0x06, 0x08, 0x00, 0x01, 0x02, 0x04, 0x06, 0x00,
    0x00, 0x00, 0x01, 0x02, 0xff, 0x00, 0x00, 0x00, 0x01, 0xfe, 0xff, 0xff, 0x00, 0x00, 0xfd, 0xfe,
    0xff, 0xff, 0x00, 0xfb, 0xfd, 0xfe, 0xff, 0x00, 0xf9, 0xfa, 0xfc, 0xfe, 0xff, 0x00, 0x02, 0x14,
    0x28, 0x46, 0x82, 0xa0, 0xc8, 0xff, 0x04, 0x05, 0x06, 0x06, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x06, 0x08, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05,
    0x07, 0x09, 0xff, 0x00, 0x00, 0x00, 0x00, 0x03, 0x04, 0x06, 0x07, 0xfe, 0xff, 0x00, 0x00, 0x00,
    0x01, 0x02, 0x03, 0x05, 0xfd, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01, 0x03, 0x05, 0xfc, 0xfe, 0xff,
    0x00, 0x00, 0x00, 0x01, 0x03, 0x05, 0xfb, 0xfd, 0xfe, 0xff, 0x00, 0x00, 0x01, 0x03, 0x05, 0xfa,
    0xfc, 0xfe, 0xff, 0x00, 0x00, 0x01, 0x03, 0x05, 0xfa, 0xfc, 0xfe, 0xff, 0x00, 0x00, 0x01, 0x03,
    0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05, 0x07, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05,
    0x06, 0x08, 0xff, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05, 0x07, 0x08, 0xfe, 0xff, 0x00, 0x00, 0x00,
    0x02, 0x04, 0x05, 0x06, 0xfd, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01, 0x04, 0x05, 0xfc, 0xfe, 0xff,
    0x00, 0x00, 0x00, 0x01, 0x04, 0x05, 0xfc, 0xfe, 0xff, 0xff, 0x00, 0x00, 0x00, 0x04, 0x05, 0xfc,
    0xfd, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01, 0x05, 0xfb, 0xfc, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01,
    0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05, 0x07, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05,
    0x06, 0x08, 0xff, 0x00, 0x00, 0x00, 0x00, 0x03, 0x05, 0x07, 0x08, 0xfe, 0xff, 0x00, 0x00, 0x00,
    0x02, 0x04, 0x05, 0x06, 0xfd, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01, 0x04, 0x05, 0xfc, 0xfe, 0xff,
    0x00, 0x00, 0x00, 0x01, 0x04, 0x05, 0xfc, 0xfe, 0xff, 0xff, 0x00, 0x00, 0x00, 0x04, 0x05, 0xfc,
    0xfd, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01, 0x05, 0xfb, 0xfc, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x01,
    0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub(crate) const BRC_IFRAME_COST: [u8; 512] = [
    0x05, 0x05, 0x08, 0x08, 0x0a, 0x0a, 0x0d, 0x0d, 0x0d, 0x0f, 0x0f, 0x19, 0x19, 0x1a, 0x1a, 0x1a,
    0x1b, 0x1b, 0x1d, 0x1d, 0x1d, 0x1d, 0x1e, 0x1e, 0x1e, 0x1e, 0x1f, 0x1f, 0x1f, 0x28, 0x28, 0x29,
    0x29, 0x29, 0x29, 0x2a, 0x2a, 0x2b, 0x2b, 0x2b, 0x2b, 0x2b, 0x2c, 0x2c, 0x2c, 0x2c, 0x2d, 0x2d,
    0x2e, 0x2e, 0x2e, 0x2e, 0x2e, 0x2f, 0x2f, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x39, 0x39, 0x39,
    0x39, 0x39, 0x39, 0x3a, 0x3a, 0x3a, 0x3a, 0x3a, 0x3a, 0x3a, 0x3a, 0x3b, 0x3b, 0x3b, 0x3b, 0x3b,
    0x3b, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x3c, 0x3d, 0x3d, 0x3d, 0x3d, 0x3d, 0x3d, 0x3e, 0x3e,
    0x3e, 0x3e, 0x3f, 0x3f, 0x3f, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x49, 0x49, 0x49, 0x49,
    0x49, 0x49, 0x4a, 0x4a, 0x4a, 0x4a, 0x4a, 0x4a, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4c, 0x4c, 0x4c,
    0x1f, 0x1f, 0x2b, 0x2b, 0x2f, 0x2f, 0x39, 0x39, 0x39, 0x3b, 0x3b, 0x3d, 0x3d, 0x3f, 0x3f, 0x3f,
    0x48, 0x48, 0x49, 0x49, 0x49, 0x49, 0x4a, 0x4a, 0x4a, 0x4a, 0x4b, 0x4b, 0x4b, 0x4c, 0x4c, 0x4d,
    0x4d, 0x4e, 0x4e, 0x4f, 0x4f, 0x58, 0x58, 0x58, 0x58, 0x58, 0x58, 0x58, 0x59, 0x59, 0x59, 0x59,
    0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5b, 0x5b, 0x5b, 0x5b, 0x5c, 0x5c, 0x5c, 0x5c, 0x5d, 0x5d, 0x5d,
    0x5d, 0x5e, 0x5e, 0x5e, 0x5e, 0x5f, 0x5f, 0x5f, 0x5f, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68,
    0x68, 0x68, 0x68, 0x68, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6a, 0x6a, 0x6a, 0x6a,
    0x6a, 0x6a, 0x6b, 0x6b, 0x6b, 0x6b, 0x6b, 0x6c, 0x6c, 0x6c, 0x6c, 0x6c, 0x6d, 0x6d, 0x6d, 0x6d,
    0x6e, 0x6e, 0x6e, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x79, 0x79,
    0x02, 0x02, 0x03, 0x03, 0x04, 0x04, 0x05, 0x05, 0x05, 0x06, 0x06, 0x07, 0x07, 0x08, 0x08, 0x08,
    0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x0a, 0x0a, 0x0a, 0x0a, 0x0b, 0x0b, 0x0b, 0x0c, 0x0c, 0x0d,
    0x0d, 0x0e, 0x0e, 0x0f, 0x0f, 0x10, 0x10, 0x11, 0x11, 0x11, 0x12, 0x12, 0x13, 0x13, 0x14, 0x14,
    0x15, 0x15, 0x16, 0x16, 0x16, 0x17, 0x17, 0x18, 0x18, 0x19, 0x19, 0x1a, 0x1a, 0x1a, 0x1a, 0x1b,
    0x1b, 0x1c, 0x1c, 0x1d, 0x1d, 0x1e, 0x1e, 0x1f, 0x1f, 0x20, 0x20, 0x21, 0x21, 0x22, 0x22, 0x23,
    0x23, 0x24, 0x24, 0x24, 0x25, 0x25, 0x26, 0x26, 0x27, 0x27, 0x28, 0x28, 0x29, 0x29, 0x2a, 0x2a,
    0x2b, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38,
    0x3a, 0x3b, 0x3c, 0x3d, 0x3d, 0x3e, 0x3f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x46, 0x47, 0x49, 0x4a,
    0x09, 0x09, 0x0e, 0x0e, 0x12, 0x12, 0x17, 0x17, 0x17, 0x1b, 0x1b, 0x20, 0x20, 0x24, 0x24, 0x24,
    0x29, 0x29, 0x2d, 0x2d, 0x2d, 0x2d, 0x32, 0x32, 0x32, 0x32, 0x36, 0x36, 0x36, 0x3b, 0x3b, 0x3f,
    0x3f, 0x44, 0x44, 0x48, 0x48, 0x4d, 0x4d, 0x51, 0x51, 0x51, 0x56, 0x56, 0x5a, 0x5a, 0x5f, 0x5f,
    0x63, 0x63, 0x68, 0x68, 0x68, 0x6c, 0x6c, 0x71, 0x71, 0x76, 0x76, 0x7a, 0x7a, 0x7f, 0x7f, 0x83,
    0x83, 0x88, 0x88, 0x8c, 0x8c, 0x91, 0x91, 0x95, 0x95, 0x9a, 0x9a, 0x9e, 0x9e, 0xa3, 0xa3, 0xa7,
    0xa7, 0xac, 0xac, 0xac, 0xb0, 0xb0, 0xb5, 0xb5, 0xb9, 0xb9, 0xbe, 0xbe, 0xc2, 0xc2, 0xc7, 0xc7,
    0xcb, 0xd0, 0xd4, 0xd9, 0xdd, 0xe2, 0xe2, 0xe6, 0xeb, 0xf0, 0xf4, 0xf9, 0xfd, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

pub(crate) const BRC_PFRAME_COST: [u32; 256] = [
    0x06040402, 0x06040402, 0x06040402, 0x06040402, 0x0d080805, 0x0d080805, 0x0d080805, 0x0d080805,
    0x0d080805, 0x190b0c07, 0x190b0c07, 0x190b0c07, 0x190b0c07, 0x1c0f0f0a, 0x1c0f0f0a, 0x1c0f0f0a,
    0x1c0f0f0a, 0x1c0f0f0a, 0x2819190c, 0x2819190c, 0x2819190c, 0x2819190c, 0x2819190c, 0x2819190c,
    0x2819190c, 0x2819190c, 0x291b1b0f, 0x291b1b0f, 0x291b1b0f, 0x291b1b0f, 0x291b1b0f, 0x2b1d1d18,
    0x2b1d1d18, 0x2b1d1d18, 0x2b1d1d18, 0x2c1f1f19, 0x2c1f1f19, 0x2c1f1f19, 0x2c1f1f19, 0x2e28281b,
    0x2e28281b, 0x2e28281b, 0x2e28281b, 0x2e28281b, 0x2f29291c, 0x2f29291c, 0x2f29291c, 0x2f29291c,
    0x382a2a1d, 0x382a2a1d, 0x382a2a1d, 0x382a2a1d, 0x382a2a1d, 0x392b2b1e, 0x392b2b1e, 0x392b2b1e,
    0x392b2b1e, 0x3a2c2c1f, 0x3a2c2c1f, 0x3a2c2c1f, 0x3a2c2c1f, 0x3b2d2d28, 0x3b2d2d28, 0x3b2d2d28,
    0x3b2d2d28, 0x3b2e2e29, 0x3b2e2e29, 0x3b2e2e29, 0x3b2e2e29, 0x3c2f2f29, 0x3c2f2f29, 0x3c2f2f29,
    0x3c2f2f29, 0x3d38382a, 0x3d38382a, 0x3d38382a, 0x3d38382a, 0x3e38382b, 0x3e38382b, 0x3e38382b,
    0x3e38382b, 0x3f38392b, 0x3f38392b, 0x3f38392b, 0x3f38392b, 0x3f38392b, 0x3f39392c, 0x3f39392c,
    0x3f39392c, 0x3f39392c, 0x48393a2c, 0x48393a2c, 0x48393a2c, 0x48393a2c, 0x483a3a2d, 0x483a3a2d,
    0x483a3a2d, 0x493a3b2e, 0x493a3b2e, 0x493b3b2e, 0x493b3b2e, 0x493b3c2f, 0x493b3c2f, 0x493b3c2f,
    0x4a3c3c2f, 0x4a3c3c2f, 0x4a3c3d38, 0x4a3c3d38, 0x4b3d3d38, 0x4b3d3d38, 0x4b3d3e38, 0x4b3d3e38,
    0x4b3e3e39, 0x4c3e3e39, 0x4c3e3e39, 0x4c3f3f39, 0x4c3f3f39, 0x4d3f3f3a, 0x4d3f3f3a, 0x4d48483a,
    0x4d48483a, 0x4d48483a, 0x4d48483a, 0x4e48483a, 0x4e48483b, 0x4e48483b, 0x4f48493b, 0x4f49493b,
    0x1a0c0907, 0x1a0c0907, 0x1a0c0907, 0x1a0c0907, 0x291b190e, 0x291b190e, 0x291b190e, 0x291b190e,
    0x291b190e, 0x2e281e1a, 0x2e281e1a, 0x2e281e1a, 0x2e281e1a, 0x392b291e, 0x392b291e, 0x392b291e,
    0x392b291e, 0x392b291e, 0x3c2e2b29, 0x3c2e2b29, 0x3c2e2b29, 0x3c2e2b29, 0x3c2e2b29, 0x3c2e2b29,
    0x3c2e2b29, 0x3c2e2b29, 0x3e382e2a, 0x3e382e2a, 0x3e382e2a, 0x3e382e2a, 0x3e382e2a, 0x483a382c,
    0x483a382c, 0x483a382c, 0x483a382c, 0x493b392e, 0x493b392e, 0x493b392e, 0x493b392e, 0x4b3d3a38,
    0x4b3d3a38, 0x4b3d3a38, 0x4b3d3a38, 0x4b3d3a38, 0x4c3e3b38, 0x4c3e3b38, 0x4c3e3b38, 0x4c3e3b38,
    0x4d483c39, 0x4d483c39, 0x4d483c39, 0x4d483c39, 0x4d483c39, 0x4e483e3a, 0x4e483e3a, 0x4e483e3a,
    0x4e483e3a, 0x4f493f3b, 0x4f493f3b, 0x4f493f3b, 0x4f493f3b, 0x584a483c, 0x584a483c, 0x584a483c,
    0x584a483c, 0x594b483d, 0x594b483d, 0x594b483d, 0x594b483d, 0x594b493e, 0x594b493e, 0x594b493e,
    0x594b493e, 0x5a4c493f, 0x5a4c493f, 0x5a4c493f, 0x5a4c493f, 0x5b4d4a48, 0x5b4d4a48, 0x5b4d4a48,
    0x5b4d4a48, 0x5b4d4b48, 0x5b4d4b48, 0x5b4d4b48, 0x5b4d4b48, 0x5b4d4b48, 0x5c4e4b48, 0x5c4e4b48,
    0x5c4e4b48, 0x5c4e4b48, 0x5c4f4c49, 0x5c4f4c49, 0x5c4f4c49, 0x5c4f4c49, 0x5d584c49, 0x5d584c49,
    0x5d584c49, 0x5e584d4a, 0x5e584d4a, 0x5e584e4a, 0x5e584e4a, 0x5f594e4b, 0x5f594e4b, 0x5f594e4b,
    0x5f594f4b, 0x5f594f4b, 0x68594f4c, 0x68594f4c, 0x685a584c, 0x685a584c, 0x685a584c, 0x685a584c,
    0x695b584d, 0x695b594d, 0x695b594d, 0x695b594e, 0x695b594e, 0x6a5c594e, 0x6a5c594e, 0x6a5c594f,
    0x6a5c594f, 0x6a5c5a4f, 0x6a5c5a4f, 0x6a5d5a58, 0x6b5d5a58, 0x6b5d5a58, 0x6b5d5b58, 0x6b5e5b58,
];

pub(crate) const BRC_QUANT_DC: [u16; 128] = [
    4, 5, 6, 7, 8, 9, 10, 10, 11, 12, 13, 14, 15, 16, 17, 17,
    18, 19, 20, 20, 21, 21, 22, 22, 23, 23, 24, 25, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 37, 38, 39, 40, 41, 42, 43,
    44, 45, 46, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58,
    59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
    75, 76, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89,
    91, 93, 95, 96, 98, 100, 101, 102, 104, 106, 108, 110, 112, 114, 116, 118,
    122, 124, 126, 128, 130, 132, 134, 136, 138, 140, 143, 145, 148, 151, 154, 157,
];

pub(crate) const BRC_QUANT_AC: [u16; 128] = [
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 60, 62, 64, 66, 68, 70, 72, 74, 76,
    78, 80, 82, 84, 86, 88, 90, 92, 94, 96, 98, 100, 102, 104, 106, 108,
    110, 112, 114, 116, 119, 122, 125, 128, 131, 134, 137, 140, 143, 146, 149, 152,
    155, 158, 161, 164, 167, 170, 173, 177, 181, 185, 189, 193, 197, 201, 205, 209,
    213, 217, 221, 225, 229, 234, 239, 245, 249, 254, 259, 264, 269, 274, 279, 284,
];

pub(crate) const BRC_SKIP_MV_THRESHOLD: [u16; 128] = [
    111, 120, 129, 137, 146, 155, 163, 172, 180, 189, 198, 206, 215, 224, 232, 241,
    249, 258, 267, 275, 284, 293, 301, 310, 318, 327, 336, 344, 353, 362, 370, 379,
    387, 396, 405, 413, 422, 431, 439, 448, 456, 465, 474, 482, 491, 500, 508, 517,
    525, 534, 543, 551, 560, 569, 577, 586, 594, 603, 612, 620, 629, 638, 646, 655,
    663, 672, 681, 689, 698, 707, 715, 724, 733, 741, 750, 758, 767, 776, 784, 793,
    802, 810, 819, 827, 836, 845, 853, 862, 871, 879, 888, 896, 905, 914, 922, 931,
    940, 948, 957, 965, 974, 983, 991, 1000, 1009, 1017, 1026, 1034, 1043, 1052, 1060, 1069,
    1078, 1086, 1095, 1103, 1112, 1121, 1129, 1138, 1147, 1155, 1164, 1172, 1181, 1190, 1198, 1208,
];

/// Intra VME costs, four entries per QP.
pub(crate) const IFRAME_VME_COSTS: [u8; 512] = [
    0x05, 0x1f, 0x02, 0x09, 0x05, 0x1f, 0x02, 0x09, 0x08, 0x2b, 0x03, 0x0e, 0x08, 0x2b, 0x03, 0x0e,
    0x0a, 0x2f, 0x04, 0x12, 0x0a, 0x2f, 0x04, 0x12, 0x0d, 0x39, 0x05, 0x17, 0x0d, 0x39, 0x05, 0x17,
    0x0d, 0x39, 0x05, 0x17, 0x0f, 0x3b, 0x06, 0x1b, 0x0f, 0x3b, 0x06, 0x1b, 0x19, 0x3d, 0x07, 0x20,
    0x19, 0x3d, 0x07, 0x20, 0x1a, 0x3f, 0x08, 0x24, 0x1a, 0x3f, 0x08, 0x24, 0x1a, 0x3f, 0x08, 0x24,
    0x1b, 0x48, 0x09, 0x29, 0x1b, 0x48, 0x09, 0x29, 0x1d, 0x49, 0x09, 0x2d, 0x1d, 0x49, 0x09, 0x2d,
    0x1d, 0x49, 0x09, 0x2d, 0x1d, 0x49, 0x09, 0x2d, 0x1e, 0x4a, 0x0a, 0x32, 0x1e, 0x4a, 0x0a, 0x32,
    0x1e, 0x4a, 0x0a, 0x32, 0x1e, 0x4a, 0x0a, 0x32, 0x1f, 0x4b, 0x0b, 0x36, 0x1f, 0x4b, 0x0b, 0x36,
    0x1f, 0x4b, 0x0b, 0x36, 0x28, 0x4c, 0x0c, 0x3b, 0x28, 0x4c, 0x0c, 0x3b, 0x29, 0x4d, 0x0d, 0x3f,
    0x29, 0x4d, 0x0d, 0x3f, 0x29, 0x4e, 0x0e, 0x44, 0x29, 0x4e, 0x0e, 0x44, 0x2a, 0x4f, 0x0f, 0x48,
    0x2a, 0x4f, 0x0f, 0x48, 0x2b, 0x58, 0x10, 0x4d, 0x2b, 0x58, 0x10, 0x4d, 0x2b, 0x58, 0x11, 0x51,
    0x2b, 0x58, 0x11, 0x51, 0x2b, 0x58, 0x11, 0x51, 0x2c, 0x58, 0x12, 0x56, 0x2c, 0x58, 0x12, 0x56,
    0x2c, 0x59, 0x13, 0x5a, 0x2c, 0x59, 0x13, 0x5a, 0x2d, 0x59, 0x14, 0x5f, 0x2d, 0x59, 0x14, 0x5f,
    0x2e, 0x5a, 0x15, 0x63, 0x2e, 0x5a, 0x15, 0x63, 0x2e, 0x5a, 0x16, 0x68, 0x2e, 0x5a, 0x16, 0x68,
    0x2e, 0x5a, 0x16, 0x68, 0x2f, 0x5b, 0x17, 0x6c, 0x2f, 0x5b, 0x17, 0x6c, 0x38, 0x5b, 0x18, 0x71,
    0x38, 0x5b, 0x18, 0x71, 0x38, 0x5c, 0x19, 0x76, 0x38, 0x5c, 0x19, 0x76, 0x38, 0x5c, 0x1a, 0x7a,
    0x38, 0x5c, 0x1a, 0x7a, 0x39, 0x5d, 0x1a, 0x7f, 0x39, 0x5d, 0x1a, 0x7f, 0x39, 0x5d, 0x1b, 0x83,
    0x39, 0x5d, 0x1b, 0x83, 0x39, 0x5e, 0x1c, 0x88, 0x39, 0x5e, 0x1c, 0x88, 0x3a, 0x5e, 0x1d, 0x8c,
    0x3a, 0x5e, 0x1d, 0x8c, 0x3a, 0x5f, 0x1e, 0x91, 0x3a, 0x5f, 0x1e, 0x91, 0x3a, 0x5f, 0x1f, 0x95,
    0x3a, 0x5f, 0x1f, 0x95, 0x3a, 0x68, 0x20, 0x9a, 0x3a, 0x68, 0x20, 0x9a, 0x3b, 0x68, 0x21, 0x9e,
    0x3b, 0x68, 0x21, 0x9e, 0x3b, 0x68, 0x22, 0xa3, 0x3b, 0x68, 0x22, 0xa3, 0x3b, 0x68, 0x23, 0xa7,
    0x3b, 0x68, 0x23, 0xa7, 0x3c, 0x68, 0x24, 0xac, 0x3c, 0x68, 0x24, 0xac, 0x3c, 0x68, 0x24, 0xac,
    0x3c, 0x69, 0x25, 0xb0, 0x3c, 0x69, 0x25, 0xb0, 0x3c, 0x69, 0x26, 0xb5, 0x3c, 0x69, 0x26, 0xb5,
    0x3d, 0x69, 0x27, 0xb9, 0x3d, 0x69, 0x27, 0xb9, 0x3d, 0x69, 0x28, 0xbe, 0x3d, 0x69, 0x28, 0xbe,
    0x3d, 0x6a, 0x29, 0xc2, 0x3d, 0x6a, 0x29, 0xc2, 0x3e, 0x6a, 0x2a, 0xc7, 0x3e, 0x6a, 0x2a, 0xc7,
    0x3e, 0x6a, 0x2b, 0xcb, 0x3e, 0x6a, 0x2b, 0xd0, 0x3f, 0x6b, 0x2c, 0xd4, 0x3f, 0x6b, 0x2d, 0xd9,
    0x3f, 0x6b, 0x2e, 0xdd, 0x48, 0x6b, 0x2f, 0xe2, 0x48, 0x6b, 0x2f, 0xe2, 0x48, 0x6c, 0x30, 0xe6,
    0x48, 0x6c, 0x31, 0xeb, 0x48, 0x6c, 0x32, 0xf0, 0x48, 0x6c, 0x33, 0xf4, 0x48, 0x6c, 0x34, 0xf9,
    0x49, 0x6d, 0x35, 0xfd, 0x49, 0x6d, 0x36, 0xff, 0x49, 0x6d, 0x37, 0xff, 0x49, 0x6d, 0x38, 0xff,
    0x49, 0x6e, 0x3a, 0xff, 0x49, 0x6e, 0x3b, 0xff, 0x4a, 0x6e, 0x3c, 0xff, 0x4a, 0x6f, 0x3d, 0xff,
    0x4a, 0x6f, 0x3d, 0xff, 0x4a, 0x6f, 0x3e, 0xff, 0x4a, 0x6f, 0x3f, 0xff, 0x4a, 0x6f, 0x40, 0xff,
    0x4b, 0x78, 0x41, 0xff, 0x4b, 0x78, 0x42, 0xff, 0x4b, 0x78, 0x43, 0xff, 0x4b, 0x78, 0x44, 0xff,
    0x4b, 0x78, 0x46, 0xff, 0x4c, 0x78, 0x47, 0xff, 0x4c, 0x79, 0x49, 0xff, 0x4c, 0x79, 0x4a, 0xff,
];

pub(crate) const NEW_MV_SKIP_THRESHOLD: [u32; 128] = [
    111, 120, 129, 137, 146, 155, 163, 172, 180, 189, 198, 206, 215, 224, 232, 241,
    249, 258, 267, 275, 284, 293, 301, 310, 318, 327, 336, 344, 353, 362, 370, 379,
    387, 396, 405, 413, 422, 431, 439, 448, 456, 465, 474, 482, 491, 500, 508, 517,
    525, 534, 543, 551, 560, 569, 577, 586, 594, 603, 612, 620, 629, 638, 646, 655,
    663, 672, 681, 689, 698, 707, 715, 724, 733, 741, 750, 758, 767, 776, 784, 793,
    802, 810, 819, 827, 836, 845, 853, 862, 871, 879, 888, 896, 905, 914, 922, 931,
    940, 948, 957, 965, 974, 983, 991, 1000, 1009, 1017, 1026, 1034, 1043, 1052, 1060, 1069,
    1078, 1086, 1095, 1103, 1112, 1121, 1129, 1138, 1147, 1155, 1164, 1172, 1181, 1190, 1198, 1208,
];

/// Mode and motion vector costs, seven dwords per QP.
pub(crate) const COST_TABLE: [u32; 896] = [
    0x398f0500, 0x6f6f6f6f, 0x0000006f, 0x06040402, 0x1a0c0907, 0x00000008, 0x0000000e,
    0x3b8f0600, 0x6f6f6f6f, 0x0000006f, 0x06040402, 0x1a0c0907, 0x0000000a, 0x00000011,
    0x3e8f0700, 0x6f6f6f6f, 0x0000006f, 0x06040402, 0x1a0c0907, 0x0000000c, 0x00000014,
    0x488f0800, 0x6f6f6f6f, 0x0000006f, 0x06040402, 0x1a0c0907, 0x0000000f, 0x00000018,
    0x498f0a00, 0x6f6f6f6f, 0x0000006f, 0x0d080805, 0x291b190e, 0x00000011, 0x0000001b,
    0x4a8f0b00, 0x6f6f6f6f, 0x0000006f, 0x0d080805, 0x291b190e, 0x00000013, 0x0000001e,
    0x4b8f0c00, 0x6f6f6f6f, 0x0000006f, 0x0d080805, 0x291b190e, 0x00000015, 0x00000022,
    0x4b8f0c00, 0x6f6f6f6f, 0x0000006f, 0x0d080805, 0x291b190e, 0x00000015, 0x00000022,
    0x4d8f0d00, 0x6f6f6f6f, 0x0000006f, 0x0d080805, 0x291b190e, 0x00000017, 0x00000025,
    0x4e8f0e00, 0x6f6f6f6f, 0x0000006f, 0x190b0c07, 0x2e281e1a, 0x00000019, 0x00000029,
    0x4f8f0f00, 0x6f6f6f6f, 0x0000006f, 0x190b0c07, 0x2e281e1a, 0x0000001b, 0x0000002c,
    0x588f1800, 0x6f6f6f6f, 0x0000006f, 0x190b0c07, 0x2e281e1a, 0x0000001d, 0x0000002f,
    0x588f1900, 0x6f6f6f6f, 0x0000006f, 0x190b0c07, 0x2e281e1a, 0x0000001f, 0x00000033,
    0x598f1900, 0x6f6f6f6f, 0x0000006f, 0x1c0f0f0a, 0x392b291e, 0x00000021, 0x00000036,
    0x5a8f1a00, 0x6f6f6f6f, 0x0000006f, 0x1c0f0f0a, 0x392b291e, 0x00000023, 0x0000003a,
    0x5a8f1a00, 0x6f6f6f6f, 0x0000006f, 0x1c0f0f0a, 0x392b291e, 0x00000023, 0x0000003a,
    0x5a8f1a00, 0x6f6f6f6f, 0x0000006f, 0x1c0f0f0a, 0x392b291e, 0x00000025, 0x0000003d,
    0x5b8f1b00, 0x6f6f6f6f, 0x0000006f, 0x1c0f0f0a, 0x392b291e, 0x00000027, 0x00000040,
    0x5b8f1c00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002a, 0x00000044,
    0x5b8f1c00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002a, 0x00000044,
    0x5c8f1c00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002c, 0x00000047,
    0x5c8f1c00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002c, 0x00000047,
    0x5d8f1d00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002e, 0x0000004a,
    0x5d8f1d00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x0000002e, 0x0000004a,
    0x5d8f1d00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x00000030, 0x0000004e,
    0x5d8f1d00, 0x6f6f6f6f, 0x0000006f, 0x2819190c, 0x3c2e2b29, 0x00000030, 0x0000004e,
    0x5e8f1e00, 0x6f6f6f6f, 0x0000006f, 0x291b1b0f, 0x3e382e2a, 0x00000032, 0x00000051,
    0x5e8f1f00, 0x6f6f6f6f, 0x0000006f, 0x291b1b0f, 0x3e382e2a, 0x00000034, 0x00000055,
    0x5e8f1f00, 0x6f6f6f6f, 0x0000006f, 0x291b1b0f, 0x3e382e2a, 0x00000034, 0x00000055,
    0x5f8f1f00, 0x6f6f6f6f, 0x0000006f, 0x291b1b0f, 0x3e382e2a, 0x00000036, 0x00000058,
    0x688f2800, 0x6f6f6f6f, 0x0000006f, 0x291b1b0f, 0x3e382e2a, 0x00000038, 0x0000005b,
    0x688f2800, 0x6f6f6f6f, 0x0000006f, 0x2b1d1d18, 0x483a382c, 0x0000003a, 0x0000005f,
    0x688f2800, 0x6f6f6f6f, 0x0000006f, 0x2b1d1d18, 0x483a382c, 0x0000003c, 0x00000062,
    0x688f2900, 0x6f6f6f6f, 0x0000006f, 0x2b1d1d18, 0x483a382c, 0x0000003e, 0x00000065,
    0x698f2900, 0x6f6f6f6f, 0x0000006f, 0x2b1d1d18, 0x483a382c, 0x00000040, 0x00000069,
    0x698f2900, 0x6f6f6f6f, 0x0000006f, 0x2c1f1f19, 0x493b392e, 0x00000043, 0x0000006c,
    0x698f2900, 0x6f6f6f6f, 0x0000006f, 0x2c1f1f19, 0x493b392e, 0x00000045, 0x00000070,
    0x6a8f2a00, 0x6f6f6f6f, 0x0000006f, 0x2c1f1f19, 0x493b392e, 0x00000047, 0x00000073,
    0x6a8f2a00, 0x6f6f6f6f, 0x0000006f, 0x2c1f1f19, 0x493b392e, 0x00000049, 0x00000076,
    0x6a8f2a00, 0x6f6f6f6f, 0x0000006f, 0x2e28281b, 0x4b3d3a38, 0x0000004b, 0x0000007a,
    0x6b8f2b00, 0x6f6f6f6f, 0x0000006f, 0x2e28281b, 0x4b3d3a38, 0x0000004d, 0x0000007d,
    0x6b8f2b00, 0x6f6f6f6f, 0x0000006f, 0x2e28281b, 0x4b3d3a38, 0x0000004d, 0x0000007d,
    0x6b8f2b00, 0x6f6f6f6f, 0x0000006f, 0x2e28281b, 0x4b3d3a38, 0x0000004f, 0x00000081,
    0x6b8f2b00, 0x6f6f6f6f, 0x0000006f, 0x2e28281b, 0x4b3d3a38, 0x00000051, 0x00000084,
    0x6b8f2c00, 0x6f6f6f6f, 0x0000006f, 0x2f29291c, 0x4c3e3b38, 0x00000053, 0x00000087,
    0x6c8f2c00, 0x6f6f6f6f, 0x0000006f, 0x2f29291c, 0x4c3e3b38, 0x00000055, 0x0000008b,
    0x6c8f2c00, 0x6f6f6f6f, 0x0000006f, 0x2f29291c, 0x4c3e3b38, 0x00000057, 0x0000008e,
    0x6c8f2c00, 0x6f6f6f6f, 0x0000006f, 0x2f29291c, 0x4c3e3b38, 0x00000059, 0x00000091,
    0x6d8f2d00, 0x6f6f6f6f, 0x0000006f, 0x382a2a1d, 0x4d483c39, 0x0000005b, 0x00000095,
    0x6d8f2d00, 0x6f6f6f6f, 0x0000006f, 0x382a2a1d, 0x4d483c39, 0x0000005e, 0x00000098,
    0x6d8f2d00, 0x6f6f6f6f, 0x0000006f, 0x382a2a1d, 0x4d483c39, 0x00000060, 0x0000009c,
    0x6d8f2d00, 0x6f6f6f6f, 0x0000006f, 0x382a2a1d, 0x4d483c39, 0x00000060, 0x0000009c,
    0x6d8f2e00, 0x6f6f6f6f, 0x0000006f, 0x382a2a1d, 0x4d483c39, 0x00000062, 0x0000009f,
    0x6e8f2e00, 0x6f6f6f6f, 0x0000006f, 0x392b2b1e, 0x4e483e3a, 0x00000064, 0x000000a2,
    0x6e8f2e00, 0x6f6f6f6f, 0x0000006f, 0x392b2b1e, 0x4e483e3a, 0x00000066, 0x000000a6,
    0x6e8f2e00, 0x6f6f6f6f, 0x0000006f, 0x392b2b1e, 0x4e483e3a, 0x00000068, 0x000000a9,
    0x6f8f2f00, 0x6f6f6f6f, 0x0000006f, 0x392b2b1e, 0x4e483e3a, 0x0000006a, 0x000000ad,
    0x6f8f2f00, 0x6f6f6f6f, 0x0000006f, 0x3a2c2c1f, 0x4f493f3b, 0x0000006c, 0x000000b0,
    0x6f8f2f00, 0x6f6f6f6f, 0x0000006f, 0x3a2c2c1f, 0x4f493f3b, 0x0000006e, 0x000000b3,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3a2c2c1f, 0x4f493f3b, 0x00000070, 0x000000b7,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3a2c2c1f, 0x4f493f3b, 0x00000072, 0x000000ba,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3b2d2d28, 0x584a483c, 0x00000074, 0x000000bd,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3b2d2d28, 0x584a483c, 0x00000076, 0x000000c1,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3b2d2d28, 0x584a483c, 0x00000079, 0x000000c4,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3b2d2d28, 0x584a483c, 0x0000007b, 0x000000c8,
    0x788f3800, 0x6f6f6f6f, 0x0000006f, 0x3b2e2e29, 0x594b483d, 0x0000007d, 0x000000cb,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3b2e2e29, 0x594b483d, 0x0000007f, 0x000000ce,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3b2e2e29, 0x594b483d, 0x00000081, 0x000000d2,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3b2e2e29, 0x594b483d, 0x00000083, 0x000000d5,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3c2f2f29, 0x594b493e, 0x00000085, 0x000000d9,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3c2f2f29, 0x594b493e, 0x00000087, 0x000000dc,
    0x798f3900, 0x6f6f6f6f, 0x0000006f, 0x3c2f2f29, 0x594b493e, 0x00000089, 0x000000df,
    0x798f3a00, 0x6f6f6f6f, 0x0000006f, 0x3c2f2f29, 0x594b493e, 0x0000008b, 0x000000e3,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3d38382a, 0x5a4c493f, 0x0000008d, 0x000000e6,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3d38382a, 0x5a4c493f, 0x0000008f, 0x000000e9,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3d38382a, 0x5a4c493f, 0x00000091, 0x000000ed,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3d38382a, 0x5a4c493f, 0x00000094, 0x000000f0,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3e38382b, 0x5b4d4a48, 0x00000096, 0x000000f4,
    0x7a8f3a00, 0x6f6f6f6f, 0x0000006f, 0x3e38382b, 0x5b4d4a48, 0x00000098, 0x000000f7,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3e38382b, 0x5b4d4a48, 0x0000009a, 0x000000fa,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3e38382b, 0x5b4d4a48, 0x0000009c, 0x000000fe,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f38392b, 0x5b4d4b48, 0x0000009e, 0x000000ff,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f38392b, 0x5b4d4b48, 0x0000009e, 0x000000ff,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f38392b, 0x5b4d4b48, 0x000000a0, 0x000000ff,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f38392b, 0x5b4d4b48, 0x000000a2, 0x000000ff,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f38392b, 0x5b4d4b48, 0x000000a4, 0x000000ff,
    0x7b8f3b00, 0x6f6f6f6f, 0x0000006f, 0x3f39392c, 0x5c4e4b48, 0x000000a6, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x3f39392c, 0x5c4e4b48, 0x000000a8, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x3f39392c, 0x5c4e4b48, 0x000000aa, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x3f39392c, 0x5c4e4b48, 0x000000ac, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x48393a2c, 0x5c4f4c49, 0x000000af, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x48393a2c, 0x5c4f4c49, 0x000000b1, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x48393a2c, 0x5c4f4c49, 0x000000b3, 0x000000ff,
    0x7c8f3c00, 0x6f6f6f6f, 0x0000006f, 0x48393a2c, 0x5c4f4c49, 0x000000b5, 0x000000ff,
    0x7d8f3d00, 0x6f6f6f6f, 0x0000006f, 0x483a3a2d, 0x5d584c49, 0x000000b7, 0x000000ff,
    0x7d8f3d00, 0x6f6f6f6f, 0x0000006f, 0x483a3a2d, 0x5d584c49, 0x000000b9, 0x000000ff,
    0x7d8f3d00, 0x6f6f6f6f, 0x0000006f, 0x483a3a2d, 0x5d584c49, 0x000000bd, 0x000000ff,
    0x7d8f3d00, 0x6f6f6f6f, 0x0000006f, 0x493a3b2e, 0x5e584d4a, 0x000000c1, 0x000000ff,
    0x7e8f3e00, 0x6f6f6f6f, 0x0000006f, 0x493a3b2e, 0x5e584d4a, 0x000000c5, 0x000000ff,
    0x7e8f3e00, 0x6f6f6f6f, 0x0000006f, 0x493b3b2e, 0x5e584e4a, 0x000000c8, 0x000000ff,
    0x7e8f3e00, 0x6f6f6f6f, 0x0000006f, 0x493b3b2e, 0x5e584e4a, 0x000000cc, 0x000000ff,
    0x7e8f3e00, 0x6f6f6f6f, 0x0000006f, 0x493b3c2f, 0x5f594e4b, 0x000000d0, 0x000000ff,
    0x7f8f3f00, 0x6f6f6f6f, 0x0000006f, 0x493b3c2f, 0x5f594e4b, 0x000000d2, 0x000000ff,
    0x7f8f3f00, 0x6f6f6f6f, 0x0000006f, 0x493b3c2f, 0x5f594e4b, 0x000000d4, 0x000000ff,
    0x7f8f3f00, 0x6f6f6f6f, 0x0000006f, 0x4a3c3c2f, 0x5f594f4b, 0x000000d8, 0x000000ff,
    0x7f8f3f00, 0x6f6f6f6f, 0x0000006f, 0x4a3c3c2f, 0x5f594f4b, 0x000000dc, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4a3c3d38, 0x68594f4c, 0x000000e0, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4a3c3d38, 0x68594f4c, 0x000000e5, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4b3d3d38, 0x685a584c, 0x000000e9, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4b3d3d38, 0x685a584c, 0x000000ed, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4b3d3e38, 0x685a584c, 0x000000f1, 0x000000ff,
    0x888f4800, 0x6f6f6f6f, 0x0000006f, 0x4b3d3e38, 0x685a584c, 0x000000f5, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4b3e3e39, 0x695b584d, 0x000000fe, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4c3e3e39, 0x695b594d, 0x000000ff, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4c3e3e39, 0x695b594d, 0x000000ff, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4c3f3f39, 0x695b594e, 0x000000ff, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4c3f3f39, 0x695b594e, 0x000000ff, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4d3f3f3a, 0x6a5c594e, 0x000000ff, 0x000000ff,
    0x898f4900, 0x6f6f6f6f, 0x0000006f, 0x4d3f3f3a, 0x6a5c594e, 0x000000ff, 0x000000ff,
    0x8a8f4a00, 0x6f6f6f6f, 0x0000006f, 0x4d48483a, 0x6a5c594f, 0x000000ff, 0x000000ff,
    0x8a8f4a00, 0x6f6f6f6f, 0x0000006f, 0x4d48483a, 0x6a5c594f, 0x000000ff, 0x000000ff,
    0x8a8f4a00, 0x6f6f6f6f, 0x0000006f, 0x4d48483a, 0x6a5c5a4f, 0x000000ff, 0x000000ff,
    0x8a8f4a00, 0x6f6f6f6f, 0x0000006f, 0x4d48483a, 0x6a5c5a4f, 0x000000ff, 0x000000ff,
    0x8a8f4a00, 0x6f6f6f6f, 0x0000006f, 0x4e48483a, 0x6a5d5a58, 0x000000ff, 0x000000ff,
    0x8b8f4b00, 0x6f6f6f6f, 0x0000006f, 0x4e48483b, 0x6b5d5a58, 0x000000ff, 0x000000ff,
    0x8b8f4b00, 0x6f6f6f6f, 0x0000006f, 0x4e48483b, 0x6b5d5a58, 0x000000ff, 0x000000ff,
    0x8b8f4b00, 0x6f6f6f6f, 0x0000006f, 0x4f48493b, 0x6b5d5b58, 0x000000ff, 0x000000ff,
    0x8b8f4b00, 0x6f6f6f6f, 0x0000006f, 0x4f49493b, 0x6b5e5b58, 0x000000ff, 0x000000ff,
];

pub(crate) const FULL_SPIRAL_48X40: [u8; 56] = [
    0x0f, 0xf0, 0x01, 0x01, 0x10, 0x10, 0x0f, 0x0f, 0x0f, 0xf0, 0xf0, 0xf0, 0x01, 0x01,
    0x01, 0x01, 0x10, 0x10, 0x10, 0x10, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0xf0, 0xf0, 0xf0,
    0xf0, 0xf0, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0xf0, 0xf0, 0xf0, 0xf0, 0xf0, 0xf0, 0xf0,
];

pub(crate) const DIAMOND: [u8; 56] = [
    0x0f, 0xf1, 0x0f, 0x12, 0x0d, 0xe2, 0x22, 0x1e, 0x10, 0xff, 0xe2, 0x20, 0xfc, 0x06,
    0xdd, 0x2e, 0xf1, 0x3f, 0xd3, 0x11, 0x3d, 0xf3, 0x1f, 0xeb, 0xf1, 0xf1, 0xf1, 0x4e,
    0x11, 0x12, 0xf2, 0xf1, 0xe0, 0xff, 0xff, 0x0d, 0x1f, 0x1f, 0x20, 0x11, 0xcf, 0xf1,
    0x05, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub(crate) const MV_REF_COST_CONTEXT: [u16; 48] = [
    1328, 10, 2047, 1, 2047, 1, 214, 304,
    1072, 21, 979, 27, 1072, 21, 321, 201,
    235, 278, 511, 107, 553, 93, 488, 115,
    534, 99, 560, 92, 255, 257, 505, 109,
    174, 361, 238, 275, 255, 257, 744, 53,
    32, 922, 113, 494, 255, 257, 816, 43,
];
